pub mod rust_std;
