pub mod api;
pub mod auth;
pub mod svc;

#[cfg(test)]
mod tests;
