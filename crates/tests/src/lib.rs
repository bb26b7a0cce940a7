#[cfg(test)]
mod common;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod access_tests;

#[cfg(test)]
mod rate_limit_tests;
