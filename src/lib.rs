pub mod config;
pub mod mcp;
pub mod vikunja;

#[cfg(test)]
mod test_support;
