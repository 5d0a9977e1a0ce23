pub const KIBIBYTE: u32 = 1024;
