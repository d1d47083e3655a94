/*
[INPUT]:  Interactive CLI subcommands
[OUTPUT]: Module wiring for the binary-only CLI helpers
[POS]:    CLI layer - binary-only helpers
[UPDATE]: When adding interactive subcommands
*/

pub mod init;
