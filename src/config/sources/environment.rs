//! Environment source: TFCTL__SECTION__KEY, e.g. TFCTL__API__TOKEN.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("TFCTL")
            .prefix_separator("__")
            .separator("__"),
    )
}
