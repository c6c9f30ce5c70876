// Adapters between native drag events and the drag token protocol
use web_sys::DragEvent;

use crate::core::services::{DragError, DragToken, DRAG_FORMAT};

pub fn write_token(ev: &DragEvent, token: &DragToken) -> Result<(), DragError> {
    let transfer = ev
        .data_transfer()
        .ok_or_else(|| DragError::Transfer("event has no dataTransfer".to_string()))?;
    let raw = token.encode()?;
    transfer
        .set_data(DRAG_FORMAT, &raw)
        .map_err(|e| DragError::Transfer(format!("{:?}", e)))?;
    transfer.set_effect_allowed("move");
    Ok(())
}

pub fn read_token(ev: &DragEvent) -> Result<DragToken, DragError> {
    let transfer = ev
        .data_transfer()
        .ok_or_else(|| DragError::Transfer("event has no dataTransfer".to_string()))?;
    let raw = transfer
        .get_data(DRAG_FORMAT)
        .map_err(|e| DragError::Transfer(format!("{:?}", e)))?;
    DragToken::decode(&raw)
}
