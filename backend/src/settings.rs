//! Service configuration loaded via OrthoConfig.
//!
//! Values layer from command-line flags, `CASHCARD_*` environment variables
//! and configuration files. Everything is optional; unset values fall back to
//! the defaults documented on each accessor.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use pagination::SortParseError;
use serde::Deserialize;

use crate::domain::{CashCardSort, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE, ListingDefaults};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Errors raised when configured values cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("host is not an IP address: {value}")]
    InvalidHost { value: String },
    #[error("{field} must be at least 1")]
    ZeroPageSize { field: &'static str },
    #[error("default page size {default} exceeds maximum page size {max}")]
    DefaultExceedsMax { default: u32, max: u32 },
    #[error("invalid default sort setting `{value}`: {source}")]
    InvalidSort {
        value: String,
        #[source]
        source: SortParseError,
    },
}

/// Configuration values for the cash card server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CASHCARD")]
pub struct CashCardSettings {
    /// Interface to bind, `0.0.0.0` when unset.
    pub host: Option<String>,
    /// TCP port to bind, `8080` when unset.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Cards are kept in memory when unset.
    pub database_url: Option<String>,
    /// Seed the demo cards into the in-memory store on startup.
    #[ortho_config(default = false)]
    pub seed_demo_data: bool,
    /// Page size applied when a listing omits `size`.
    pub default_page_size: Option<u32>,
    /// Largest `size` a listing may request.
    pub max_page_size: Option<u32>,
    /// Field listings are ordered by when they omit `sort`: `amount` or `id`.
    pub default_sort_field: Option<String>,
    /// Direction paired with `default_sort_field`: `asc` or `desc`.
    pub default_sort_direction: Option<String>,
}

impl CashCardSettings {
    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| SettingsError::InvalidHost {
                    value: raw.to_owned(),
                })?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Listing defaults handed to the cash card service.
    pub fn listing_defaults(&self) -> Result<ListingDefaults, SettingsError> {
        let page_size = non_zero(self.default_page_size, DEFAULT_PAGE_SIZE, "default_page_size")?;
        let max_page_size = non_zero(self.max_page_size, DEFAULT_MAX_PAGE_SIZE, "max_page_size")?;
        if page_size > max_page_size {
            return Err(SettingsError::DefaultExceedsMax {
                default: page_size.get(),
                max: max_page_size.get(),
            });
        }
        let fallback = ListingDefaults::default().sort;
        let field = parse_or(self.default_sort_field.as_deref(), *fallback.field())?;
        let direction = parse_or(self.default_sort_direction.as_deref(), fallback.direction())?;
        Ok(ListingDefaults {
            sort: CashCardSort::new(field, direction),
            page_size,
            max_page_size,
        })
    }
}

fn parse_or<T>(raw: Option<&str>, fallback: T) -> Result<T, SettingsError>
where
    T: FromStr<Err = SortParseError>,
{
    match raw {
        Some(value) => value.parse().map_err(|source| SettingsError::InvalidSort {
            value: value.to_owned(),
            source,
        }),
        None => Ok(fallback),
    }
}

fn non_zero(
    value: Option<u32>,
    fallback: NonZeroU32,
    field: &'static str,
) -> Result<NonZeroU32, SettingsError> {
    match value {
        Some(raw) => NonZeroU32::new(raw).ok_or(SettingsError::ZeroPageSize { field }),
        None => Ok(fallback),
    }
}
