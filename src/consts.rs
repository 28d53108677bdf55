pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Timing and geometry constants for the terminal dashboard,
    //! organized by functional area.

    // =============================================================================
    // EVENT LOOP
    // =============================================================================

    /// How long the UI loop waits for terminal input before redrawing (milliseconds).
    pub const INPUT_POLL_MS: u64 = 100;

    /// How long the splash screen stays up unless a key is pressed (seconds).
    pub const SPLASH_DURATION_SECS: u64 = 2;

    // =============================================================================
    // LAYOUT
    // =============================================================================

    /// Layout geometry shared by rendering and mouse hit-testing
    pub mod layout {
        /// Width of the sidebar column, including borders.
        pub const SIDEBAR_WIDTH: u16 = 30;

        /// Height of the page header (title and subtitle).
        pub const HEADER_HEIGHT: u16 = 3;

        /// Height of a metrics card, including borders.
        pub const METRICS_CARD_HEIGHT: u16 = 6;

        /// Height of the key-hint footer.
        pub const FOOTER_HEIGHT: u16 = 2;

        /// Lines occupied by one patient queue row.
        pub const QUEUE_ROW_HEIGHT: u16 = 3;

        /// Height of the chat header and of the chat input box.
        pub const CHAT_HEADER_HEIGHT: u16 = 3;
        pub const CHAT_INPUT_HEIGHT: u16 = 3;
    }

    // =============================================================================
    // SNAPSHOT MODE
    // =============================================================================

    /// Default off-screen frame size for `medichat snapshot`.
    pub const SNAPSHOT_WIDTH: u16 = 140;
    pub const SNAPSHOT_HEIGHT: u16 = 40;
}
