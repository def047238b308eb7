mod booking;
mod lifecycle;
mod review;
mod search;
