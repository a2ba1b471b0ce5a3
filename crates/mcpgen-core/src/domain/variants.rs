//! Template variants.
//!
//! Conditional code shapes (sync vs async signature, context parameter, auth
//! wrapper) are a closed set of named variants selected by a pure function
//! of the request flags. Templates branch on the variant name; adding a new
//! flag means adding a new variant here, and the set stays exhaustively
//! testable.

use super::request::GenerationFlags;

/// Signature shape of the generated handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureVariant {
    Sync,
    Async,
    SyncWithContext,
    AsyncWithContext,
}

impl SignatureVariant {
    pub const ALL: [SignatureVariant; 4] = [
        SignatureVariant::Sync,
        SignatureVariant::Async,
        SignatureVariant::SyncWithContext,
        SignatureVariant::AsyncWithContext,
    ];

    /// Select the variant for a set of flags. Total over the flag space.
    pub fn select(flags: &GenerationFlags) -> Self {
        match (flags.is_async, flags.with_context) {
            (false, false) => Self::Sync,
            (true, false) => Self::Async,
            (false, true) => Self::SyncWithContext,
            (true, true) => Self::AsyncWithContext,
        }
    }

    /// Stable name used as the template dispatch key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
            Self::SyncWithContext => "sync_ctx",
            Self::AsyncWithContext => "async_ctx",
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Self::Async | Self::AsyncWithContext)
    }

    pub fn has_context(&self) -> bool {
        matches!(self, Self::SyncWithContext | Self::AsyncWithContext)
    }
}

/// Body wrapper shape of the generated handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperVariant {
    Plain,
    Auth,
}

impl WrapperVariant {
    pub fn select(flags: &GenerationFlags) -> Self {
        if flags.with_auth {
            Self::Auth
        } else {
            Self::Plain
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Auth => "auth",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(is_async: bool, with_context: bool, with_auth: bool) -> GenerationFlags {
        GenerationFlags {
            is_async,
            with_context,
            with_auth,
            ..GenerationFlags::default()
        }
    }

    #[test]
    fn signature_selection_covers_the_flag_space() {
        assert_eq!(
            SignatureVariant::select(&flags(false, false, false)),
            SignatureVariant::Sync
        );
        assert_eq!(
            SignatureVariant::select(&flags(true, false, false)),
            SignatureVariant::Async
        );
        assert_eq!(
            SignatureVariant::select(&flags(false, true, false)),
            SignatureVariant::SyncWithContext
        );
        assert_eq!(
            SignatureVariant::select(&flags(true, true, false)),
            SignatureVariant::AsyncWithContext
        );
    }

    #[test]
    fn variant_names_are_unique() {
        let mut names: Vec<_> = SignatureVariant::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SignatureVariant::ALL.len());
    }

    #[test]
    fn variant_properties_round_trip_to_flags() {
        for v in SignatureVariant::ALL {
            let f = flags(v.is_async(), v.has_context(), false);
            assert_eq!(SignatureVariant::select(&f), v);
        }
    }

    #[test]
    fn auth_flag_selects_wrapper() {
        assert_eq!(
            WrapperVariant::select(&flags(false, false, true)),
            WrapperVariant::Auth
        );
        assert_eq!(
            WrapperVariant::select(&flags(true, true, false)),
            WrapperVariant::Plain
        );
    }
}
