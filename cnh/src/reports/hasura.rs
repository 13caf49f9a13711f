//! Hasura configuration summary.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct HasuraReport {
    pub endpoint: String,
    pub has_admin_secret: bool,
}

impl Report for HasuraReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Hasura configuration:");
        out.key_value("Endpoint", &self.endpoint);
        out.key_value(
            "Admin Secret",
            if self.has_admin_secret { "******" } else { "None" },
        );
    }
}
