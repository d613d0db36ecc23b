pub mod stall_only;
