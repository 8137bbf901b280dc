mod order_draft;
mod plane_row;
