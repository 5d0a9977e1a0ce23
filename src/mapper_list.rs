use enum_iterator::Sequence;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::mapper::{LookupResult, Mapper};
use crate::mappers as m;

// Every supported multigame board, by the identifier used on the command line and in ROM databases.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Sequence, EnumString, IntoStaticStr, Display)]
pub enum Board {
    #[strum(serialize = "action52")]
    Action52,
    #[strum(serialize = "caltron6in1")]
    Caltron6In1,
    #[strum(serialize = "caltron9in1")]
    Caltron9In1,
    #[strum(serialize = "rumblestation")]
    Rumblestation,
    #[strum(serialize = "svision16")]
    Supervision16In1,
    #[strum(serialize = "kn42")]
    Kn42,
    #[strum(serialize = "n625092")]
    N625092,
    #[strum(serialize = "a65as")]
    A65as,
    #[strum(serialize = "t262")]
    T262,
    #[strum(serialize = "novel1")]
    Novel1,
    #[strum(serialize = "novel2")]
    Novel2,
    #[strum(serialize = "studyngame")]
    StudyNGame,
    #[strum(serialize = "sgun20in1")]
    SuperGun20In1,
    #[strum(serialize = "bmc_190in1")]
    Golden190In1,
    #[strum(serialize = "vt5201")]
    Vt5201,
    #[strum(serialize = "bmc_60311c")]
    Bmc60311c,
    #[strum(serialize = "bmc_80013b")]
    Bmc80013b,
    #[strum(serialize = "bmc_810544c")]
    Bmc810544c,
    #[strum(serialize = "bmc_830425c")]
    Bmc830425c,
    #[strum(serialize = "bmc_850437c")]
    Bmc850437c,
    #[strum(serialize = "ntd03")]
    Ntd03,
    #[strum(serialize = "bmc_ctc09")]
    Ctc09,
    #[strum(serialize = "bmc_gb63")]
    Ghostbusters63In1,
    #[strum(serialize = "bmc_gka")]
    Gka,
    #[strum(serialize = "bmc_gkb")]
    Gkb,
    #[strum(serialize = "bmc_gkcxin1")]
    Gkcxin1,
    #[strum(serialize = "bmc_k1029")]
    K1029,
    #[strum(serialize = "bmc_k3036")]
    K3036,
    #[strum(serialize = "bmc_k3046")]
    K3046,
    #[strum(serialize = "bmc_sa005a")]
    Sa005a,
    #[strum(serialize = "bmc_tj03")]
    Tj03,
    #[strum(serialize = "bmc_ws")]
    Ws,
    #[strum(serialize = "bmc_11160")]
    Bmc11160,
    #[strum(serialize = "bmc_g146")]
    G146,
    #[strum(serialize = "bmc_2751")]
    Bmc2751,
    #[strum(serialize = "bmc_8157")]
    Bmc8157,
    #[strum(serialize = "bmc_hik300")]
    Hik300,
    #[strum(serialize = "bmc_s700")]
    Super700In1,
    #[strum(serialize = "bmc_ball11")]
    Ball11In1,
    #[strum(serialize = "bmc_22games")]
    Games22,
    #[strum(serialize = "bmc_64y2k")]
    Y2k64In1,
    #[strum(serialize = "bmc_12in1")]
    Bmc12In1,
    #[strum(serialize = "bmc_20in1")]
    Bmc20In1,
    #[strum(serialize = "bmc_21in1")]
    Bmc21In1,
    #[strum(serialize = "bmc_31in1")]
    Bmc31In1,
    #[strum(serialize = "bmc_35in1")]
    Bmc35In1,
    #[strum(serialize = "bmc_36in1")]
    Bmc36In1,
    #[strum(serialize = "bmc_64in1")]
    Bmc64In1,
    #[strum(serialize = "bmc_70in1")]
    Bmc70In1,
    #[strum(serialize = "bmc_72in1")]
    Bmc72In1,
    #[strum(serialize = "bmc_76in1")]
    Bmc76In1,
    #[strum(serialize = "bmc_150in1")]
    Bmc150In1,
    #[strum(serialize = "bmc_500in1")]
    Bmc500In1,
    #[strum(serialize = "bmc_800in1")]
    Bmc800In1,
    #[strum(serialize = "bmc_1200in1")]
    Bmc1200In1,
    #[strum(serialize = "bmc_gold150")]
    Golden150In1,
    #[strum(serialize = "bmc_gold260")]
    Golden260In1,
    #[strum(serialize = "bmc_th22913")]
    Th22913,
    #[strum(serialize = "bmc_super22")]
    Super22Games,
    #[strum(serialize = "bmc_4in1reset")]
    ResetBased4In1,
    #[strum(serialize = "bmc_42in1reset")]
    ResetBased42In1,
    #[strum(serialize = "bmc_lc160")]
    LittleCom160,
}

impl Board {
    // A fresh board in its power-on state. Nothing is applied to a Bus until power_on/reset.
    pub fn mapper(self) -> Box<dyn Mapper> {
        use Board::*;
        match self {
            Action52 => Box::new(m::action52::Action52),
            Caltron6In1 => Box::new(m::caltron6in1::Caltron6In1::default()),
            Caltron9In1 => Box::new(m::caltron9in1::Caltron9In1::default()),
            Rumblestation => Box::new(m::rumblestation::Rumblestation::default()),
            Supervision16In1 => Box::new(m::svision16::Supervision16In1::default()),
            Kn42 => Box::new(m::kn42::Kn42::default()),
            N625092 => Box::new(m::n625092::N625092::default()),
            A65as => Box::new(m::a65as::A65as),
            T262 => Box::new(m::t262::T262::default()),
            Novel1 => Box::new(m::novel1::Novel1),
            Novel2 => Box::new(m::novel2::Novel2),
            StudyNGame => Box::new(m::studyngame::StudyNGame),
            SuperGun20In1 => Box::new(m::sgun20in1::SuperGun20In1),
            Golden190In1 => Box::new(m::bmc_190in1::Golden190In1::default()),
            Vt5201 => Box::new(m::vt5201::Vt5201::default()),
            Bmc60311c => Box::new(m::bmc_60311c::Bmc60311c::default()),
            Bmc80013b => Box::new(m::bmc_80013b::Bmc80013b::default()),
            Bmc810544c => Box::new(m::bmc_810544c::Bmc810544c),
            Bmc830425c => Box::new(m::bmc_830425c::Bmc830425c::default()),
            Bmc850437c => Box::new(m::bmc_850437c::Bmc850437c::default()),
            Ntd03 => Box::new(m::ntd03::Ntd03),
            Ctc09 => Box::new(m::bmc_ctc09::Ctc09),
            Ghostbusters63In1 => Box::new(m::bmc_gb63::Ghostbusters63In1::default()),
            Gka => Box::new(m::bmc_gka::Gka::default()),
            Gkb => Box::new(m::bmc_gkb::Gkb),
            Gkcxin1 => Box::new(m::bmc_gkcxin1::Gkcxin1),
            K1029 => Box::new(m::bmc_k1029::K1029::default()),
            K3036 => Box::new(m::bmc_k3036::K3036),
            K3046 => Box::new(m::bmc_k3046::K3046),
            Sa005a => Box::new(m::bmc_sa005a::Sa005a),
            Tj03 => Box::new(m::bmc_tj03::Tj03),
            Ws => Box::new(m::bmc_ws::Ws::default()),
            Bmc11160 => Box::new(m::bmc_11160::Bmc11160),
            G146 => Box::new(m::bmc_g146::G146),
            Bmc2751 => Box::new(m::bmc_2751::Bmc2751),
            Bmc8157 => Box::new(m::bmc_8157::Bmc8157::default()),
            Hik300 => Box::new(m::bmc_hik300::Hik300),
            Super700In1 => Box::new(m::bmc_s700::Super700In1),
            Ball11In1 => Box::new(m::bmc_ball11::Ball11In1::default()),
            Games22 => Box::new(m::bmc_22games::Games22::default()),
            Y2k64In1 => Box::new(m::bmc_64y2k::Y2k64In1::default()),
            Bmc12In1 => Box::new(m::bmc_12in1::Bmc12In1::default()),
            Bmc20In1 => Box::new(m::bmc_20in1::Bmc20In1),
            Bmc21In1 => Box::new(m::bmc_21in1::Bmc21In1),
            Bmc31In1 => Box::new(m::bmc_31in1::Bmc31In1),
            Bmc35In1 => Box::new(m::bmc_35in1::Bmc35In1),
            Bmc36In1 => Box::new(m::bmc_36in1::Bmc36In1),
            Bmc64In1 => Box::new(m::bmc_64in1::Bmc64In1),
            Bmc70In1 => Box::new(m::bmc_70in1::Bmc70In1::default()),
            Bmc72In1 => Box::new(m::bmc_72in1::Bmc72In1::default()),
            Bmc76In1 => Box::new(m::bmc_76in1::Bmc76In1::default()),
            Bmc150In1 => Box::new(m::bmc_150in1::Bmc150In1),
            Bmc500In1 => Box::new(m::bmc_500in1::Bmc500In1),
            Bmc800In1 => Box::new(m::bmc_800in1::Bmc800In1::default()),
            Bmc1200In1 => Box::new(m::bmc_1200in1::Bmc1200In1::default()),
            Golden150In1 => Box::new(m::bmc_gold150::Golden150In1::default()),
            Golden260In1 => Box::new(m::bmc_gold260::Golden260In1),
            Th22913 => Box::new(m::bmc_th22913::Th22913::default()),
            Super22Games => Box::new(m::bmc_super22::Super22Games),
            ResetBased4In1 => Box::new(m::bmc_4in1reset::ResetBased4In1::default()),
            ResetBased42In1 => Box::new(m::bmc_42in1reset::ResetBased42In1::default()),
            LittleCom160 => Box::new(m::bmc_lc160::LittleCom160),
        }
    }

    // The iNES or NES 2.0 mapper number, for boards that have been assigned one.
    pub fn mapper_number(self) -> Option<u16> {
        use Board::*;
        let number = match self {
            Action52 => 228,
            Caltron6In1 => 41,
            Caltron9In1 => 389,
            Rumblestation => 46,
            Supervision16In1 => 53,
            Kn42 => 381,
            N625092 => 221,
            Novel1 => 54,
            Novel2 => 213,
            StudyNGame => 39,
            SuperGun20In1 => 214,
            Golden190In1 => 300,
            Bmc60311c => 289,
            Bmc80013b => 274,
            Bmc810544c => 261,
            Bmc830425c => 320,
            Bmc850437c => 396,
            Ntd03 => 290,
            Ctc09 => 335,
            Gka => 57,
            Gkb => 58,
            Gkcxin1 => 288,
            K1029 => 15,
            K3036 => 340,
            K3046 => 336,
            Sa005a => 338,
            Tj03 => 341,
            Ws => 332,
            Bmc11160 => 299,
            G146 => 349,
            Bmc2751 => 174,
            Bmc8157 => 301,
            Hik300 => 212,
            Super700In1 => 62,
            Ball11In1 => 51,
            Games22 => 230,
            Bmc20In1 => 231,
            Bmc21In1 => 201,
            Bmc31In1 => 229,
            Bmc35In1 => 203,
            Bmc36In1 => 200,
            Bmc64In1 => 204,
            Bmc72In1 => 225,
            Bmc76In1 => 226,
            Bmc150In1 => 202,
            Bmc500In1 => 217,
            Bmc1200In1 => 227,
            Golden150In1 | Golden260In1 => 235,
            Th22913 => 63,
            LittleCom160 => 541,
            A65as | T262 | Vt5201 | Ghostbusters63In1 | Y2k64In1 | Bmc12In1 | Bmc70In1 | Bmc800In1
                | Super22Games | ResetBased4In1 | ResetBased42In1 => return None,
        };

        Some(number)
    }
}

pub fn lookup_board(name: &str) -> Result<Box<dyn Mapper>, String> {
    let board: Board = name.parse()
        .map_err(|_| format!("Board '{name}' is not a supported multicart board."))?;
    Ok(board.mapper())
}

pub fn lookup_mapper_number(number: u16) -> Result<Box<dyn Mapper>, String> {
    match try_lookup_mapper_number(number) {
        LookupResult::Supported(mapper) => Ok(mapper),
        LookupResult::UnassignedMapper =>
            Err(format!("Mapper {number} is not a supported multicart board.")),
    }
}

pub fn try_lookup_mapper_number(number: u16) -> LookupResult {
    use LookupResult::*;
    match number {
        // Mapper 235 boards can't be told apart by number. The larger one is the common dump.
        235 => m::bmc_gold260::Golden260In1.supported(),
        // Same board, 110-in-1 and 72-in-1 dumps.
        225 | 255 => m::bmc_72in1::Bmc72In1::default().supported(),
        _ => match enum_iterator::all::<Board>().find(|board| board.mapper_number() == Some(number)) {
            Some(board) => Supported(board.mapper()),
            None => UnassignedMapper,
        }
    }
}
