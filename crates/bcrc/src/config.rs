//! Engine selection configuration (environment overrides).
//!
//! The catalogue defaults to the table engine. Setting `BCRC_FORCE` switches
//! every engine built through [`create_standard`](crate::create_standard) to
//! another backend, which is useful when bisecting a mismatch between the two
//! engines in a running system:
//!
//! | `BCRC_FORCE` | Effect |
//! |--------------|--------|
//! | `auto` (or unset) | table engine |
//! | `table`, `portable`, `optimal` | table engine |
//! | `reference`, `bitwise`, `generic` | bitwise generic engine |
//!
//! The variable is read once per process. Unknown values are ignored.

/// Forced engine selection for catalogue algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EngineForce {
  /// Use the default selector (table engine).
  #[default]
  Auto,
  /// Force the bitwise generic engine (slow, obviously correct).
  Reference,
  /// Force the table engine.
  Table,
}

impl EngineForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Table => "table",
    }
  }

  /// Parse an override value, ignoring ASCII case and surrounding whitespace.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference")
      || value.eq_ignore_ascii_case("bitwise")
      || value.eq_ignore_ascii_case("generic")
    {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("table")
      || value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("optimal")
    {
      return Some(Self::Table);
    }
    None
  }
}

/// Engine selection configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: EngineForce,
  /// Force mode actually used by the selector.
  ///
  /// Both engines are always available, so this only differs from
  /// `requested_force` in that `Auto` resolves to `Table`.
  pub effective_force: EngineForce,
}

impl EngineConfig {
  const fn from_requested(requested_force: EngineForce) -> Self {
    let effective_force = match requested_force {
      EngineForce::Auto | EngineForce::Table => EngineForce::Table,
      EngineForce::Reference => EngineForce::Reference,
    };
    Self {
      requested_force,
      effective_force,
    }
  }
}

/// Environment variable holding the force override.
pub const FORCE_ENV: &str = "BCRC_FORCE";

#[cfg(feature = "std")]
fn read_env_overrides() -> EngineForce {
  let Ok(value) = std::env::var(FORCE_ENV) else {
    return EngineForce::Auto;
  };
  if value.trim().is_empty() {
    return EngineForce::Auto;
  }
  match EngineForce::parse(&value) {
    Some(force) => {
      log::debug!("{FORCE_ENV}={} applied", force.as_str());
      force
    }
    None => {
      log::debug!("{FORCE_ENV}={value:?} not recognised, using auto");
      EngineForce::Auto
    }
  }
}

#[cfg(feature = "std")]
fn overrides() -> EngineForce {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<EngineForce> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> EngineForce {
  EngineForce::Auto
}

/// Get the effective engine configuration (overrides applied).
#[inline]
#[must_use]
pub fn get() -> EngineConfig {
  EngineConfig::from_requested(overrides())
}
