//! User-facing response messages
//!
//! The API is consumed by a Vietnamese-language assistant, so counts are
//! reported in Vietnamese.

/// Health check message
pub const HEALTHY: &str = "API đang hoạt động bình thường";

/// "Found {n} candidates"
pub fn candidates_found(count: usize) -> String {
    format!("Đã tìm thấy {count} ứng viên")
}

/// "Found {n} job openings"
pub fn openings_found(count: usize) -> String {
    format!("Đã tìm thấy {count} vị trí tuyển dụng")
}

/// "Found {n} hiring stages"
pub fn stages_found(count: usize) -> String {
    format!("Đã tìm thấy {count} giai đoạn tuyển dụng")
}
