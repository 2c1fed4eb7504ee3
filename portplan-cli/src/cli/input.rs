//! Reader for the whitespace-separated network description.
//!
//! The stream holds, in order: the city count; the port count followed by
//! that many `city cost` pairs; the highway count followed by that many
//! `first second cost` triples. Anything after the last highway is ignored.
//! City ids are not range-checked here; [`NetworkBuilder::build`] does that.

use std::str::{FromStr, SplitWhitespace};

use portplan_core::NetworkBuilder;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a network description.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum InputError {
    /// The stream ended before `field` was read.
    #[error("unexpected end of input while reading {field}")]
    UnexpectedEof {
        /// Field that was expected next.
        field: &'static str,
    },
    /// A token could not be read as a non-negative integer.
    #[error("invalid {field} `{token}` at token {position}")]
    InvalidInteger {
        /// Field being read.
        field: &'static str,
        /// Offending token.
        token: String,
        /// One-based token position in the stream.
        position: usize,
    },
    /// A token was a negative integer.
    #[error("{field} must not be negative, found `{token}` at token {position}")]
    Negative {
        /// Field being read.
        field: &'static str,
        /// Offending token.
        token: String,
        /// One-based token position in the stream.
        position: usize,
    },
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_value<T: FromStr>(&mut self, field: &'static str) -> Result<T, InputError> {
        let token = self
            .inner
            .next()
            .ok_or(InputError::UnexpectedEof { field })?;
        self.position += 1;
        token.parse().map_err(|_| {
            let negative = token.strip_prefix('-').is_some_and(|digits| {
                !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
            });
            if negative {
                InputError::Negative {
                    field,
                    token: token.to_owned(),
                    position: self.position,
                }
            } else {
                InputError::InvalidInteger {
                    field,
                    token: token.to_owned(),
                    position: self.position,
                }
            }
        })
    }
}

/// Reads a network description into a [`NetworkBuilder`].
///
/// # Errors
/// Returns [`InputError`] when the stream ends early or holds a token that
/// is not a non-negative integer.
///
/// # Examples
/// ```
/// use portplan_cli::cli::parse_network;
///
/// let builder = parse_network("2\n0\n1\n1 2 5\n")?;
/// let network = builder.build()?;
/// assert_eq!(network.city_count(), 2);
/// assert_eq!(network.highways().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_network(text: &str) -> Result<NetworkBuilder, InputError> {
    let mut tokens = Tokens::new(text);

    let city_count: usize = tokens.next_value("city count")?;
    let mut builder = NetworkBuilder::new(city_count);

    let port_count: usize = tokens.next_value("port count")?;
    for _ in 0..port_count {
        let city = tokens.next_value("port city")?;
        let cost = tokens.next_value("port cost")?;
        builder.push_port(city, cost);
    }

    let highway_count: usize = tokens.next_value("highway count")?;
    for _ in 0..highway_count {
        let first = tokens.next_value("highway first city")?;
        let second = tokens.next_value("highway second city")?;
        let cost = tokens.next_value("highway cost")?;
        builder.push_highway(first, second, cost);
    }

    debug!(
        city_count,
        port_count,
        highway_count,
        tokens = tokens.position,
        "network description read"
    );
    Ok(builder)
}
