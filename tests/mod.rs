//////////////////
// Test modules //
//////////////////

mod derivation;
mod identifiers;
mod signature;

//////////////////
// Test helpers //
//////////////////

pub mod helpers {
    pub const TZ1: &str = "tz1aWXP237BLwNHJcCD4b3DutCevhqq2T1Z9";
    pub const BLOCK_HASH: &str = "BKoifs5gGffAzuRBcg3ygxbLdrCXyDDS1ALvMG8SFYWahzoYMku";
    pub const TXN_HASH: &str = "opUmZNMueryYFxTbzzocS7K4dzs3NmgKqhhr9TkcftszDDnoRVu";
    pub const SIGNATURE: &str = "spsig1DWTuXdgUg2t64PLRfaapsYejCoCVVkqy2Zjv41Zirt7MjoqSfBnP38qoAg3SWicfQNiG25yMqGYge4jrfrwv9H8hRKDyY";

    /// secp256k1 key pair with secret scalar `[1; 32]`
    pub const SECRET_KEY: &str = "spsk1S1KpLsBEXYYvHeFQAyKTBDgXaKqRBfAH1aJQS54XgBpLaSYoK";
    pub const PUBLIC_KEY: &str = "sppk7bTVxYg1ZXwPumgFcid8rBBW443MCb5DHw6y3aq7dLcAKUMTa8S";
    pub const TZ2: &str = "tz2JdR1f2ssXHBELKBWFCsXGyB4ZgzZZQ2Pg";
}
