//! 管理页的交互流程：批量删除确认、弹框表单生命周期

pub mod batch;
pub mod dialog;

pub use batch::{BatchOutcome, ConfirmBody, DeleteConfirm, RowDeleter};
pub use dialog::{DialogMachine, DialogPhase};
