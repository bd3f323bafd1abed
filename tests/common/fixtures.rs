//! Shared state-file fixtures.

/// A saved catalogue with version 1.0 of GUID-A already marked
pub const EXISTING_STATE: &str = r#"{
  "apps": {
    "GUID-A": {
      "entityGuid": "GUID-A",
      "versions": {
        "1.0": {
          "appBuild": "1.0.0",
          "appId": 7,
          "appName": "Shop",
          "appVersion": "1.0",
          "appVersionId": 70,
          "entityGuid": "GUID-A",
          "timestamp": 1700000000000
        }
      }
    }
  }
}
"#;
