//! Tracing setup
//!
//! `RUST_LOG` wins when set. Otherwise the directives below apply: the service
//! itself is chattier than its dependencies, and outbound Supabase traffic
//! (`reqwest`, `hyper_util`) stays quiet outside dev.

use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "luxe_properties=debug,tower_http=debug,reqwest=debug,info",
        Environment::Staging => "luxe_properties=debug,tower_http=info,hyper_util=warn,info",
        Environment::Prod => "luxe_properties=info,tower_http=info,hyper_util=warn,warn",
    }
}

fn wants_json(env: &Environment) -> bool {
    matches!(env, Environment::Prod)
}

pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    let registry = tracing_subscriber::registry().with(filter);
    if wants_json(env) {
        registry.with(fmt_layer.json().flatten_event(true)).init();
    } else {
        registry.with(fmt_layer.pretty()).init();
    }

    tracing::info!(env = ?env, json = wants_json(env), "Logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        for env in [Environment::Dev, Environment::Staging, Environment::Prod] {
            assert!(default_directives(&env).parse::<EnvFilter>().is_ok());
        }
    }

    #[test]
    fn only_prod_logs_json() {
        assert!(!wants_json(&Environment::Dev));
        assert!(!wants_json(&Environment::Staging));
        assert!(wants_json(&Environment::Prod));
    }
}
