pub mod status;
pub mod validator;

#[cfg(test)]
mod test_support;

pub use status::parse_status;
pub use validator::check_response;
