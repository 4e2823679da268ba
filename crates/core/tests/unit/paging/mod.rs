/// Frame table hit/miss, eviction, and writeback accounting.
pub mod frame_table;
