//! Instructions shown when the Nuxt config could not be edited.

use cnh_templates::{ast::JsObject, builder::CodeBuilder};

use super::output::{Output, Report};

/// The settings the user has to merge into their Nuxt config by hand.
#[derive(Debug)]
pub struct ManualConfigReport {
    pub settings: JsObject,
}

impl ManualConfigReport {
    pub fn new(settings: JsObject) -> Self {
        Self { settings }
    }

    /// The settings wrapped in a `defineNuxtConfig` call.
    pub fn snippet(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&self.settings.to_block("export default defineNuxtConfig(", ");"));
        builder.build()
    }
}

impl Report for ManualConfigReport {
    fn render(&self, out: &mut dyn Output) {
        out.info("Add the following to your Nuxt config:");
        out.preformatted(self.snippet().trim_end());
    }
}

#[cfg(test)]
mod tests {
    use cnh_templates::ast::JsArray;

    use super::*;

    #[test]
    fn test_snippet() {
        let report = ManualConfigReport::new(
            JsObject::new().array("modules", JsArray::new().string("@nuxtjs/apollo")),
        );
        assert_eq!(
            report.snippet(),
            "export default defineNuxtConfig({\n  modules: [\"@nuxtjs/apollo\"],\n});\n"
        );
    }
}
