//! Closed vocabularies of the reporting schema.
//!
//! Each enum maps a symbolic value to exactly one wire token. Tokens are
//! additive-only: an existing token must never be renamed, because reports
//! already submitted with it would no longer match.

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{Error, Result};

/// A closed, ordered list of (symbol, token) pairs.
pub trait Vocabulary: Sized + Copy + 'static {
  /// Human-readable vocabulary name, used in error messages.
  const NAME: &'static str;

  /// The fixed wire token for this value. Never empty.
  fn token(self) -> &'static str;

  /// Decode a wire token. Unknown tokens fail rather than defaulting.
  fn from_token(token: &str) -> Result<Self>;

  /// Every value, in declaration order.
  fn all() -> Vec<Self>;
}

macro_rules! vocabulary {
  ($($ty:ident => $name:literal),* $(,)?) => {
    $(
      impl Vocabulary for $ty {
        const NAME: &'static str = $name;

        fn token(self) -> &'static str { self.into() }

        fn from_token(token: &str) -> Result<Self> {
          token.parse().map_err(|_| Error::UnknownToken {
            vocabulary: $name,
            token:      token.to_string(),
          })
        }

        fn all() -> Vec<Self> { <Self as IntoEnumIterator>::iter().collect() }
      }
    )*
  };
}

// ─── Incident ────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum IncidentType {
  #[strum(
    serialize = "Child Pornography (possession, manufacture, and distribution)"
  )]
  ChildPornographyPossessionManufactureAndDistribution,
  #[strum(serialize = "Child Sex Trafficking")]
  ChildSexTrafficking,
  #[strum(serialize = "Child Sex Tourism")]
  ChildSexTourism,
  #[strum(serialize = "Child Sexual Molestation")]
  ChildSexualMolestation,
  #[strum(serialize = "Misleading Domain Name")]
  MisleadingDomainName,
  #[strum(serialize = "Misleading Words or Digital Images on the Internet")]
  MisleadingWordsOrDigitalImagesOnTheInternet,
  #[strum(serialize = "Online Enticement of Children for Sexual Acts")]
  OnlineEnticementOfChildrenForSexualActs,
  #[strum(serialize = "Unsolicited Obscene Material Sent to a Child")]
  UnsolicitedObsceneMaterialSentToAChild,
}

/// Why several near-duplicate files share one report shell.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum BatchedReportReason {
  #[strum(serialize = "Viral/Potential Meme")]
  ViralPotentialMeme,
}

// ─── Contact methods ─────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum AddressType {
  Home,
  Business,
  Billing,
  Shipping,
  Technical,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum PhoneType {
  Mobile,
  Home,
  Business,
  Work,
  Fax,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum EmailType {
  Home,
  Work,
  Business,
}

// ─── Accounts and capture events ─────────────────────────────────────────────

/// The event during which an IP address or device identifier was observed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum IpCaptureType {
  Login,
  Registration,
  Purchase,
  Upload,
  Other,
  Unknown,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum AssociatedAccountType {
  Creator,
}

// ─── Files ───────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum FileRelevance {
  Reported,
  #[strum(serialize = "Supplemental Reported")]
  SupplementalReported,
  #[strum(serialize = "Supplemental Unreported")]
  SupplementalUnreported,
}

/// Industry categorization scheme (A = prepubescent, B = pubescent; 1 = sex
/// act, 2 = lascivious exhibition).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum IndustryClassification {
  A1,
  A2,
  B1,
  B2,
}

// ─── Geography ───────────────────────────────────────────────────────────────

/// US states, the District of Columbia, territories and military mail codes.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
#[allow(clippy::upper_case_acronyms)]
#[rustfmt::skip]
pub enum UsState {
  AL, AK, AZ, AR, CA, CO, CT, DE, FL, GA, HI, ID, IL, IN, IA, KS, KY,
  LA, ME, MD, MA, MI, MN, MS, MO, MT, NE, NV, NH, NJ, NM, NY, NC, ND,
  OH, OK, OR, PA, RI, SC, SD, TN, TX, UT, VT, VA, WA, WV, WI, WY,
  DC, AS, GU, MP, PR, VI, AA, AE, AP,
}

impl UsState {
  /// Render as a free-text region (e.g. for `EstimatedLocation::region`).
  pub fn to_region(self) -> String { self.token().to_string() }
}

/// ISO 3166-1 alpha-2 country codes.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
#[allow(clippy::upper_case_acronyms)]
#[rustfmt::skip]
pub enum Country {
  AD, AE, AF, AG, AI, AL, AM, AO, AQ, AR, AS, AT, AU, AW, AX, AZ,
  BA, BB, BD, BE, BF, BG, BH, BI, BJ, BL, BM, BN, BO, BQ, BR, BS, BT, BV,
  BW, BY, BZ, CA, CC, CD, CF, CG, CH, CI, CK, CL, CM, CN, CO, CR, CU, CV,
  CW, CX, CY, CZ, DE, DJ, DK, DM, DO, DZ, EC, EE, EG, EH, ER, ES, ET,
  FI, FJ, FK, FM, FO, FR, GA, GB, GD, GE, GF, GG, GH, GI, GL, GM, GN, GP,
  GQ, GR, GS, GT, GU, GW, GY, HK, HM, HN, HR, HT, HU, ID, IE, IL, IM, IN,
  IO, IQ, IR, IS, IT, JE, JM, JO, JP, KE, KG, KH, KI, KM, KN, KP, KR, KW,
  KY, KZ, LA, LB, LC, LI, LK, LR, LS, LT, LU, LV, LY, MA, MC, MD, ME, MF,
  MG, MH, MK, ML, MM, MN, MO, MP, MQ, MR, MS, MT, MU, MV, MW, MX, MY, MZ,
  NA, NC, NE, NF, NG, NI, NL, NO, NP, NR, NU, NZ, OM, PA, PE, PF, PG, PH,
  PK, PL, PM, PN, PR, PS, PT, PW, PY, QA, RE, RO, RS, RU, RW, SA, SB, SC,
  SD, SE, SG, SH, SI, SJ, SK, SL, SM, SN, SO, SR, SS, ST, SV, SX, SY, SZ,
  TC, TD, TF, TG, TH, TJ, TK, TL, TM, TN, TO, TR, TT, TV, TW, TZ, UA, UG,
  UM, US, UY, UZ, VA, VC, VE, VG, VI, VN, VU, WF, WS, YE, YT, ZA, ZM, ZW,
}

vocabulary! {
  IncidentType => "incident type",
  BatchedReportReason => "batched report reason",
  AddressType => "address type",
  PhoneType => "phone type",
  EmailType => "email type",
  IpCaptureType => "IP capture event type",
  AssociatedAccountType => "associated account type",
  FileRelevance => "file relevance",
  IndustryClassification => "industry classification",
  UsState => "US state",
  Country => "country code",
}
