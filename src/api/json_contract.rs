use serde::{Deserialize, Serialize};

use crate::api::ChartSettings;
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_SETTINGS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettingsJsonContractV1 {
    pub schema_version: u32,
    pub settings: ChartSettings,
}

fn check_schema(kind: &str, version: u32, expected: u32) -> ChartResult<()> {
    if version != expected {
        return Err(ChartError::InvalidData(format!(
            "unsupported {kind} schema version: {version}"
        )));
    }
    Ok(())
}

impl RenderFrame {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Accepts either a bare frame or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<RenderFrame>(input) {
            return Ok(frame);
        }
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input)?;
        check_schema("render frame", payload.schema_version, RENDER_FRAME_JSON_SCHEMA_V1)?;
        Ok(payload.frame)
    }
}

impl ChartSettings {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSettingsJsonContractV1 {
            schema_version: CHART_SETTINGS_JSON_SCHEMA_V1,
            settings: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Accepts either bare settings or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(settings) = serde_json::from_str::<ChartSettings>(input) {
            return Ok(settings);
        }
        let payload: ChartSettingsJsonContractV1 = serde_json::from_str(input)?;
        check_schema(
            "chart settings",
            payload.schema_version,
            CHART_SETTINGS_JSON_SCHEMA_V1,
        )?;
        Ok(payload.settings)
    }
}
