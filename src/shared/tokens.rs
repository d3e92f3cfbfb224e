use rand::RngCore;

/// Opaque 32-hex-char share token, the URL-safe identity of previews
/// and shared templates.
pub fn generate_share_id() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
