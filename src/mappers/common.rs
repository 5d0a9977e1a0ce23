// BMC-60311C, K-1029, N625092, TH2291-3
pub mod vram_protect;
