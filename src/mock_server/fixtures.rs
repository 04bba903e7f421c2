//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic DependencyTrack records.

use serde_json::{json, Value};

/// UUID of the project in the default scenario.
pub const FIRMWARE_PROJECT_UUID: &str = "11111111-1111-1111-1111-111111111111";

/// UUID of the dnsmasq component in the default scenario.
pub const DNSMASQ_COMPONENT_UUID: &str = "22222222-2222-2222-2222-222222222222";

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// The data a default mock server starts with.
pub struct DefaultScenario {
    pub projects: Vec<Value>,
    pub components: Vec<Value>,
    pub licenses: Vec<Value>,
    pub vulnerabilities: Vec<Value>,
    pub project_properties: Vec<(String, Value)>,
    pub project_dependencies: Vec<(String, Value)>,
    pub component_dependencies: Vec<(String, Value)>,
}

impl Fixtures {
    // =========================================================================
    // Record Fixtures
    // =========================================================================

    /// Create a project record.
    pub fn project(uuid: &str, name: &str, version: &str) -> Value {
        json!({
            "uuid": uuid,
            "name": name,
            "version": version,
            "classifier": "FIRMWARE",
            "active": true,
            "tags": []
        })
    }

    /// Create a component record.
    pub fn component(uuid: &str, name: &str, version: &str) -> Value {
        json!({
            "uuid": uuid,
            "name": name,
            "version": version,
            "purl": format!("pkg:generic/{name}@{version}"),
            "isInternal": false
        })
    }

    /// Create a license record with full text.
    pub fn license(license_id: &str, name: &str, osi_approved: bool) -> Value {
        json!({
            "uuid": format!("lic-{}", license_id.to_lowercase()),
            "licenseId": license_id,
            "name": name,
            "isOsiApproved": osi_approved,
            "isFsfLibre": osi_approved,
            "isDeprecatedLicenseId": false,
            "licenseText": format!("Full text of {name}."),
            "template": "",
            "header": ""
        })
    }

    /// Create a vulnerability record.
    pub fn vulnerability(vuln_id: &str, severity: &str, description: &str) -> Value {
        json!({
            "vulnId": vuln_id,
            "source": "NVD",
            "severity": severity,
            "description": description
        })
    }

    /// Create a project property record.
    pub fn property(group: &str, name: &str, value: &str) -> Value {
        json!({
            "groupName": group,
            "propertyName": name,
            "propertyValue": value,
            "propertyType": "STRING"
        })
    }

    /// Create `count` numbered components, for pagination tests.
    pub fn bulk_components(count: usize) -> Vec<Value> {
        (0..count)
            .map(|i| {
                Self::component(
                    &format!("00000000-0000-4000-8000-{i:012}"),
                    &format!("lib{i}"),
                    "1.0.0",
                )
            })
            .collect()
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// A router firmware project with three components, three licenses and a
    /// dnsmasq CVE.
    pub fn default_scenario() -> DefaultScenario {
        let dnsmasq = Self::component(DNSMASQ_COMPONENT_UUID, "dnsmasq", "2.78");
        let busybox = Self::component(
            "33333333-3333-3333-3333-333333333333",
            "busybox",
            "1.31.1",
        );
        let openssl = Self::component(
            "44444444-4444-4444-4444-444444444444",
            "openssl",
            "1.1.1k",
        );

        DefaultScenario {
            projects: vec![Self::project(
                FIRMWARE_PROJECT_UUID,
                "Acme Router Firmware",
                "1.0.0",
            )],
            components: vec![dnsmasq.clone(), busybox.clone(), openssl.clone()],
            licenses: vec![
                Self::license("GPL-2.0-only", "GNU General Public License v2.0 only", true),
                Self::license("Apache-2.0", "Apache License 2.0", true),
                Self::license("MIT", "MIT License", true),
            ],
            vulnerabilities: vec![Self::vulnerability(
                "CVE-2017-14491",
                "CRITICAL",
                "Heap-based buffer overflow in dnsmasq before 2.78",
            )],
            project_properties: vec![(
                FIRMWARE_PROJECT_UUID.to_string(),
                Self::property("integrations", "defectdojo.engagementId", "42"),
            )],
            project_dependencies: vec![(
                FIRMWARE_PROJECT_UUID.to_string(),
                json!([dnsmasq, busybox, openssl]),
            )],
            component_dependencies: vec![(DNSMASQ_COMPONENT_UUID.to_string(), json!([]))],
        }
    }
}
