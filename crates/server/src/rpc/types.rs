//! Request and response bodies.
//!
//! Field names are camelCase on the wire to stay compatible with the
//! existing browser client.

use chroma_types::{Color, ColorSelection, CycleView};
use serde::{Deserialize, Serialize};

/// Body of `GET /api/state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleStateResponse {
    /// `null` once every color of the cycle has been handed out.
    pub current_color: Option<Color>,
    pub color_index: usize,
    pub total_colors: usize,
    pub is_cycle_complete: bool,
}

impl From<CycleView> for CycleStateResponse {
    fn from(view: CycleView) -> Self {
        Self {
            current_color: view.current_color,
            color_index: view.color_index,
            total_colors: view.total_colors,
            is_cycle_complete: view.is_cycle_complete,
        }
    }
}

/// Body of `POST /api/next-color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextColorResponse {
    pub selected_color: Color,
    pub new_index: usize,
    pub total_colors: usize,
    pub is_cycle_complete: bool,
}

impl From<ColorSelection> for NextColorResponse {
    fn from(selection: ColorSelection) -> Self {
        Self {
            selected_color: selection.selected_color,
            new_index: selection.new_index,
            total_colors: selection.total_colors,
            is_cycle_complete: selection.is_cycle_complete,
        }
    }
}

/// Body returned with any 5xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_response_wire_format() {
        let body = CycleStateResponse {
            current_color: Some(Color::Green),
            color_index: 4,
            total_colors: 12,
            is_cycle_complete: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currentColor": "green",
                "colorIndex": 4,
                "totalColors": 12,
                "isCycleComplete": false,
            })
        );
    }

    #[test]
    fn test_complete_cycle_serializes_null_color() {
        let body = CycleStateResponse {
            current_color: None,
            color_index: 12,
            total_colors: 12,
            is_cycle_complete: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["currentColor"].is_null());
    }

    #[test]
    fn test_next_color_wire_format() {
        let body = NextColorResponse {
            selected_color: Color::Red,
            new_index: 1,
            total_colors: 12,
            is_cycle_complete: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "selectedColor": "red",
                "newIndex": 1,
                "totalColors": 12,
                "isCycleComplete": false,
            })
        );
    }
}
