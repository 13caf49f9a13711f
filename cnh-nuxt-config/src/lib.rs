//! Formatting-preserving editor for `nuxt.config.{ts,js,mjs}`.
//!
//! The exported settings object is located (unwrapping a factory call such
//! as `defineNuxtConfig({...})`), parsed into spans, and edited in place.
//!
//! ```
//! use cnh_nuxt_config::{ConfigValue, NuxtConfig};
//!
//! let mut config = NuxtConfig::parse(
//!     "export default defineNuxtConfig({\n  ssr: true\n})\n",
//!     "nuxt.config.ts",
//! )
//! .unwrap();
//! config.add_module("@nuxtjs/apollo").unwrap();
//! config
//!     .set("apollo.clients.default", ConfigValue::string("./apollo/apollo.ts"))
//!     .unwrap();
//! assert_eq!(config.modules(), ["@nuxtjs/apollo"]);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
mod edit;
mod error;
mod nuxt;
mod parse;

pub use edit::{ConfigValue, NuxtConfig};
pub use error::{Error, Result};
pub use nuxt::{
    APOLLO_MODULE, MutateOutcome, add_apollo_client, add_module, add_runtime_config, locate,
    update_nuxt_config,
};
