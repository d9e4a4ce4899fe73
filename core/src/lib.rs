pub mod decode;
pub mod error;
pub mod params;
pub mod shamir;
pub mod testcase;
