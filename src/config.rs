//! Static site configuration
//!
//! The registry of extraction rules, full-file inclusions, and directory
//! tree inclusions for the documentation site. Everything here is a
//! compile-time constant; a run never mutates it. Rules are processed in
//! the order they are listed.

/// One glob group: which files to scan, which marker pair delimits
/// snippets there, and the fence language tag for the output.
#[derive(Debug)]
pub struct ExtractRule {
    pub patterns: &'static [&'static str],
    pub start: &'static str,
    pub end: &'static str,
    pub highlight: &'static str,
}

/// A whole file included verbatim, bypassing marker extraction.
#[derive(Debug)]
pub struct FullFileRule {
    pub id: &'static str,
    pub path: &'static str,
    pub highlight: &'static str,
}

/// A directory rendered with the external tree command.
#[derive(Debug)]
pub struct TreeRule {
    pub id: &'static str,
    pub path: &'static str,
}

/// The full configuration a flow runs against.
#[derive(Debug)]
pub struct SiteConfig {
    pub extract: &'static [ExtractRule],
    pub full_files: &'static [FullFileRule],
    pub trees: &'static [TreeRule],
}

/// Default output directory, under the root.
pub const OUTPUT_DIR: &str = "shortcodes";

/// Output files are named `gen_<key>.html`.
pub const OUTPUT_PREFIX: &str = "gen_";
pub const OUTPUT_EXT: &str = "html";

/// Fence tag used for directory tree shortcodes.
pub const TREE_HIGHLIGHT: &str = "text";

/// The documentation site's rule set.
pub const SITE: SiteConfig = SiteConfig {
    extract: &[
        ExtractRule {
            patterns: &[
                "javascript-cypress-sms-testing/**/*.ts",
                "javascript-cypress-sms-testing/cypress/support/*.js",
                "nodejs-nodemailer-smtp-example/spec/*Spec.js",
            ],
            start: "//<gen>",
            end: "//</gen>",
            highlight: "typescript",
        },
        ExtractRule {
            patterns: &[
                "javascript-cypress-js/**/*.js",
                "javascript-cypress-mailslurp-plugin/cypress/support/e2e.js",
            ],
            start: "//<gen>",
            end: "//</gen>",
            highlight: "javascript",
        },
        ExtractRule {
            patterns: &["rlang-email-sending-in-r/*.r"],
            start: "#<gen>",
            end: "#</gen>",
            highlight: "r",
        },
        ExtractRule {
            patterns: &["java-maven-selenium/src/**/*.java"],
            start: "//<gen>",
            end: "//</gen>",
            highlight: "java",
        },
        ExtractRule {
            patterns: &[
                "playwright-sms-testing/tests/*.spec.ts",
                "javascript-cypress-mailslurp-plugin/cypress/e2e/*.ts",
                "playwright-email-testing/tests/*.ts",
            ],
            start: "//<gen>",
            end: "//</gen>",
            highlight: "typescript",
        },
        ExtractRule {
            patterns: &["visualbasic/visualbasic/*.vb"],
            start: "'<gen>",
            end: "'</gen>",
            highlight: "vba",
        },
        ExtractRule {
            patterns: &["golang-smtp-client-test/*.go"],
            start: "<gen>",
            end: "</gen>",
            highlight: "go",
        },
    ],
    full_files: &[
        FullFileRule {
            id: "cypress_plugin_package_json",
            path: "javascript-cypress-mailslurp-plugin/package.json",
            highlight: "json",
        },
        FullFileRule {
            id: "cypress_client_full",
            path: "javascript-cypress-js/cypress/e2e/example.cy.js",
            highlight: "javascript",
        },
        FullFileRule {
            id: "cypress_sms_config",
            path: "javascript-cypress-sms-testing/cypress.config.ts",
            highlight: "typescript",
        },
        FullFileRule {
            id: "cypress_sms_full",
            path: "javascript-cypress-sms-testing/cypress/e2e/integration-test.cy.ts",
            highlight: "typescript",
        },
        FullFileRule {
            id: "cypress_client_package_json",
            path: "javascript-cypress-js/package.json",
            highlight: "json",
        },
        FullFileRule {
            id: "cypress_client_config",
            path: "javascript-cypress-js/cypress.config.js",
            highlight: "javascript",
        },
        FullFileRule {
            id: "cypress_plugin_config",
            path: "javascript-cypress-mailslurp-plugin/cypress.config.ts",
            highlight: "typescript",
        },
        FullFileRule {
            id: "cypress_plugin_full",
            path: "javascript-cypress-mailslurp-plugin/cypress/e2e/integration-test.cy.ts",
            highlight: "typescript",
        },
        FullFileRule {
            id: "java_jakarta_mail_pom",
            path: "java-jakarta-mail/pom.xml",
            highlight: "xml",
        },
        FullFileRule {
            id: "powershell_ps1",
            path: "powershell-email-send-ps1/send.ps1",
            highlight: "pwsh",
        },
    ],
    trees: &[TreeRule {
        id: "java_jakarta_mail_tree",
        path: "java-jakarta-mail",
    }],
};
