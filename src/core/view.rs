use crate::core::ConfigProvider;
use crate::domain::model::{
    FunctionId, ModuleId, SideLaunchField, SideLaunchInfo, ViewRequest, SIDE_LAUNCH_VIEW_FUNCTION,
};
use crate::domain::ports::ViewTransport;
use crate::utils::error::{ClientError, Result};
use serde_json::{Map, Value};

/// Reads the side launch registry through the module's aggregate view.
///
/// Every call goes to the node. Nothing is retried or cached, and the result
/// may lag behind transactions submitted moments earlier.
pub struct ViewReader<T: ViewTransport> {
    transport: T,
    function: FunctionId,
}

impl<T: ViewTransport> ViewReader<T> {
    pub fn new<C: ConfigProvider + ?Sized>(transport: T, config: &C) -> Self {
        let module = ModuleId::new(config.module_address(), config.module_name());
        Self {
            transport,
            function: module.function(SIDE_LAUNCH_VIEW_FUNCTION),
        }
    }

    pub fn function(&self) -> &FunctionId {
        &self.function
    }

    pub async fn fetch_side_launches(&self) -> Result<Vec<SideLaunchInfo>> {
        let request = ViewRequest::without_arguments(self.function.clone());
        tracing::debug!("Calling view function {}", self.function);

        let raw = self.transport.view(&request).await.map_err(|e| {
            tracing::error!("View call {} failed: {}", self.function, e);
            ClientError::ReadFailure {
                message: e.to_string(),
            }
        })?;

        let launches = decode_side_launches(&raw);
        tracing::info!("Fetched {} side launches", launches.len());
        Ok(launches)
    }
}

/// Unwraps the single-element response of `get_side_launch_info`.
///
/// A missing or malformed wrapper yields an empty list instead of an error.
pub fn decode_side_launches(raw: &Value) -> Vec<SideLaunchInfo> {
    let outer = match raw.as_array() {
        Some(outer) => outer,
        None => {
            tracing::warn!("View response is not an array, treating as empty");
            return Vec::new();
        }
    };

    if outer.len() > 1 {
        tracing::debug!("View response has {} values, using the first", outer.len());
    }

    match outer.first() {
        Some(Value::Array(items)) => items.iter().map(decode_side_launch).collect(),
        Some(_) => {
            tracing::warn!("View response wrapper is not an array, treating as empty");
            Vec::new()
        }
        None => {
            tracing::debug!("View response is empty");
            Vec::new()
        }
    }
}

/// Decodes one record. Absent or mistyped fields fall back to `""` / `false`
/// and are recorded in `missing_fields`.
pub fn decode_side_launch(value: &Value) -> SideLaunchInfo {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);
    let mut missing_fields = Vec::new();

    let mut text = |field: SideLaunchField| -> String {
        match fields.get(field.as_str()).and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => {
                missing_fields.push(field);
                String::new()
            }
        }
    };

    let name = text(SideLaunchField::Name);
    let description = text(SideLaunchField::Description);
    let collection_address = text(SideLaunchField::CollectionAddress);
    let metadata_uri = text(SideLaunchField::MetadataUri);

    let is_active = match fields
        .get(SideLaunchField::IsActive.as_str())
        .and_then(Value::as_bool)
    {
        Some(active) => active,
        None => {
            missing_fields.push(SideLaunchField::IsActive);
            false
        }
    };

    if !missing_fields.is_empty() {
        tracing::debug!(
            "Side launch '{}' decoded with defaults for {:?}",
            name,
            missing_fields
        );
    }

    SideLaunchInfo {
        name,
        description,
        collection_address,
        metadata_uri,
        is_active,
        missing_fields,
    }
}
