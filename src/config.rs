pub mod bundled;
