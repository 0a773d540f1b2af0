//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::MachineConfig) from a literal
/// description.
///
/// Expands to a [`MachineConfigBuilder`](crate::MachineConfigBuilder) chain
/// and yields its `build()` result. States are enumerated in declaration
/// order.
///
/// # Example
///
/// ```
/// use gearshift::machine_config;
///
/// let config = machine_config! {
///     initial: "off",
///     states: {
///         "off": { "toggle" => "on" },
///         "on":  { "toggle" => "off" },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial, "off");
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $( $state:literal : { $( $event:literal => $target:literal ),* $(,)? } ),* $(,)?
        } $(,)?
    ) => {{
        let mut builder = $crate::builder::MachineConfigBuilder::new().initial($initial);
        $(
            builder = builder.state($state);
            $( builder = builder.transition($state, $event, $target); )*
        )*
        builder.build()
    }};

    (
        initial: $initial:expr,
        states: {
            $( $state:literal : { $( $event:literal => $target:literal ),* $(,)? } ),* $(,)?
        },
        history_limit: $limit:expr $(,)?
    ) => {{
        let mut builder = $crate::builder::MachineConfigBuilder::new()
            .initial($initial)
            .history_limit($limit);
        $(
            builder = builder.state($state);
            $( builder = builder.transition($state, $event, $target); )*
        )*
        builder.build()
    }};
}
