pub mod pr_ready;
