//! Process-wide dispatchers.
//!
//! A process-wide dispatcher is created on first access and lives until the
//! process exits. Its hierarchy is fixed at creation. There are two ways to
//! get one:
//!
//! - [`define_dispatcher!`](crate::define_dispatcher) declares an accessor
//!   together with its participating kinds. The first call builds the
//!   dispatcher over exactly that set.
//! - The built-in instance behind [`dispatcher`]. Call [`install`] during
//!   setup to choose its participating kinds. If it is first reached through
//!   [`dispatcher`] instead, it has an empty hierarchy and every
//!   [`connect_handler`](Dispatcher::connect_handler) call on it fails with
//!   [`HeraldError::NotADerivation`].

use crate::{dispatcher::Dispatcher, hierarchy::Hierarchy};
use herald_core::HeraldError;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Dispatcher> = OnceLock::new();

/// Create the built-in process-wide dispatcher with `hierarchy`.
///
/// Fails with [`HeraldError::AlreadyInitialized`] once an instance exists,
/// whether it was installed or created lazily.
pub fn install(hierarchy: Hierarchy) -> Result<&'static Dispatcher, HeraldError> {
    let mut installed = false;
    let dispatcher = GLOBAL.get_or_init(|| {
        installed = true;
        Dispatcher::new(hierarchy)
    });
    if installed {
        Ok(dispatcher)
    } else {
        Err(HeraldError::AlreadyInitialized)
    }
}

/// The built-in process-wide dispatcher, created on first access.
pub fn dispatcher() -> &'static Dispatcher {
    GLOBAL.get_or_init(|| {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "global dispatcher created before install; connected routing is unavailable"
        );
        Dispatcher::new(Hierarchy::empty())
    })
}

/// Whether the built-in process-wide dispatcher exists yet.
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// Declares a lazily created process-wide dispatcher over a closed set of
/// event kinds.
///
/// The generated function builds the dispatcher on its first call with
/// `Hierarchy::of::<Kinds>()` and returns the same instance afterwards. A
/// malformed kind list is reported on every call.
///
/// # Example
/// ```ignore
/// herald::define_dispatcher! {
///     /// Session events.
///     pub fn sessions() = kinds![Connected, Reconnected, Disconnected];
/// }
///
/// sessions()?.connect_handler::<Reconnected, Connected>(&audit)?;
/// sessions()?.post(&reconnected);
/// ```
#[macro_export]
macro_rules! define_dispatcher {
    ($(#[$meta:meta])* $vis:vis fn $name:ident() = $kinds:ty $(;)?) => {
        $(#[$meta])*
        $vis fn $name() -> ::core::result::Result<
            &'static $crate::Dispatcher,
            $crate::herald_core::HierarchyError,
        > {
            static DISPATCHER: ::std::sync::OnceLock<
                ::core::result::Result<$crate::Dispatcher, $crate::herald_core::HierarchyError>,
            > = ::std::sync::OnceLock::new();
            DISPATCHER
                .get_or_init(|| $crate::Hierarchy::of::<$kinds>().map($crate::Dispatcher::new))
                .as_ref()
                .map_err(::core::clone::Clone::clone)
        }
    };
}
