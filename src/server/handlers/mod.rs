pub mod rides;
