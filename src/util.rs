#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Byte orders the NBT codec can be instantiated with.
///
/// Java edition peers speak [`BigEndian`](zerocopy::BigEndian) on the wire.
pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

pub(crate) const MINECRAFT_NAMESPACE: &str = "minecraft:";

/// Returns `key` with the `minecraft:` namespace prepended if it has none.
pub(crate) fn namespaced(key: &str) -> std::borrow::Cow<'_, str> {
    if key.contains(':') {
        std::borrow::Cow::Borrowed(key)
    } else {
        std::borrow::Cow::Owned(format!("{MINECRAFT_NAMESPACE}{key}"))
    }
}
