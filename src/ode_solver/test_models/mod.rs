pub mod dydt_y2;
pub mod exponential_decay;
pub mod gauge_one_loop;
