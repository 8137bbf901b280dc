mod order;
mod priority;
mod status;
