mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// Something a tree node can be indexed with: a list position (`usize`) or a
/// compound key (`&str` / `String`).
///
/// The trait is sealed; it only routes the lookup to the matching closure.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        position: impl FnOnce(&'a V, usize) -> R,
        key: impl FnOnce(&'a V, &str) -> R,
    ) -> R;

    #[doc(hidden)]
    fn index_dispatch_mut<'a, V, R>(
        &self,
        value: &'a mut V,
        position: impl FnOnce(&'a mut V, usize) -> R,
        key: impl FnOnce(&'a mut V, &str) -> R,
    ) -> R;
}

impl Index for usize {
    #[inline]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        position: impl FnOnce(&'a V, usize) -> R,
        _: impl FnOnce(&'a V, &str) -> R,
    ) -> R {
        position(value, *self)
    }

    #[inline]
    fn index_dispatch_mut<'a, V, R>(
        &self,
        value: &'a mut V,
        position: impl FnOnce(&'a mut V, usize) -> R,
        _: impl FnOnce(&'a mut V, &str) -> R,
    ) -> R {
        position(value, *self)
    }
}

impl Index for str {
    #[inline]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        _: impl FnOnce(&'a V, usize) -> R,
        key: impl FnOnce(&'a V, &str) -> R,
    ) -> R {
        key(value, self)
    }

    #[inline]
    fn index_dispatch_mut<'a, V, R>(
        &self,
        value: &'a mut V,
        _: impl FnOnce(&'a mut V, usize) -> R,
        key: impl FnOnce(&'a mut V, &str) -> R,
    ) -> R {
        key(value, self)
    }
}

impl Index for String {
    #[inline]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        position: impl FnOnce(&'a V, usize) -> R,
        key: impl FnOnce(&'a V, &str) -> R,
    ) -> R {
        self.as_str().index_dispatch(value, position, key)
    }

    #[inline]
    fn index_dispatch_mut<'a, V, R>(
        &self,
        value: &'a mut V,
        position: impl FnOnce(&'a mut V, usize) -> R,
        key: impl FnOnce(&'a mut V, &str) -> R,
    ) -> R {
        self.as_str().index_dispatch_mut(value, position, key)
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn index_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        position: impl FnOnce(&'a V, usize) -> R,
        key: impl FnOnce(&'a V, &str) -> R,
    ) -> R {
        (**self).index_dispatch(value, position, key)
    }

    #[inline]
    fn index_dispatch_mut<'a, V, R>(
        &self,
        value: &'a mut V,
        position: impl FnOnce(&'a mut V, usize) -> R,
        key: impl FnOnce(&'a mut V, &str) -> R,
    ) -> R {
        (**self).index_dispatch_mut(value, position, key)
    }
}
