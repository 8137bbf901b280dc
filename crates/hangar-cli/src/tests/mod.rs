mod client;
mod pictures;
