pub mod common;

pub mod a65as;
pub mod action52;
pub mod bmc_11160;
pub mod bmc_1200in1;
pub mod bmc_12in1;
pub mod bmc_150in1;
pub mod bmc_190in1;
pub mod bmc_20in1;
pub mod bmc_21in1;
pub mod bmc_22games;
pub mod bmc_2751;
pub mod bmc_31in1;
pub mod bmc_35in1;
pub mod bmc_36in1;
pub mod bmc_42in1reset;
pub mod bmc_4in1reset;
pub mod bmc_500in1;
pub mod bmc_60311c;
pub mod bmc_64in1;
pub mod bmc_64y2k;
pub mod bmc_70in1;
pub mod bmc_72in1;
pub mod bmc_76in1;
pub mod bmc_80013b;
pub mod bmc_800in1;
pub mod bmc_810544c;
pub mod bmc_8157;
pub mod bmc_830425c;
pub mod bmc_850437c;
pub mod bmc_ball11;
pub mod bmc_ctc09;
pub mod bmc_g146;
pub mod bmc_gb63;
pub mod bmc_gka;
pub mod bmc_gkb;
pub mod bmc_gkcxin1;
pub mod bmc_gold150;
pub mod bmc_gold260;
pub mod bmc_hik300;
pub mod bmc_k1029;
pub mod bmc_k3036;
pub mod bmc_k3046;
pub mod bmc_lc160;
pub mod bmc_s700;
pub mod bmc_sa005a;
pub mod bmc_super22;
pub mod bmc_th22913;
pub mod bmc_tj03;
pub mod bmc_ws;
pub mod caltron6in1;
pub mod caltron9in1;
pub mod kn42;
pub mod n625092;
pub mod novel1;
pub mod novel2;
pub mod ntd03;
pub mod rumblestation;
pub mod sgun20in1;
pub mod studyngame;
pub mod svision16;
pub mod t262;
pub mod vt5201;
