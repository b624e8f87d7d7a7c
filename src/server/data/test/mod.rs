mod imageboard;
mod member;
