mod common;

mod generation_test;
mod health_test;
mod relay_test;
