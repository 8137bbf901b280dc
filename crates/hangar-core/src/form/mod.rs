pub mod order_draft;
pub mod order_edit;
pub mod plane_row;
