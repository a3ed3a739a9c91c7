//! The DELTA32 watch list: the fixed ticker universe every dashboard derives
//! its rows from. Order matters: it is the stable tie-break for rankings.

/// Tickers from the research desk's TOP 50 export (47 names survive the
/// de-dup against delisted entries).
pub const WATCHLIST_SYMBOLS: [&str; 47] = [
    "SOFI", "RBLX", "LGND", "MAGS", "STX", "CRDO", "TSLA", "MP", "TPR", "B",
    "ALAB", "NMRK", "MCHI", "AFK", "LIT", "NLR", "TSEM", "XME", "DAPP", "SNDK",
    "EVR", "IDCC", "AMG", "APP", "BITQ", "PFSI", "BKCH", "HOOD", "AXON", "PLTR",
    "PVLA", "TREE", "ENS", "SHOP", "NET", "HIMS", "CRWV", "FLEX", "JBL", "RYCEY",
    "CLS", "DASH", "WBD", "ILF", "SLVP", "OKLO", "NEM",
];

/// Company name for a ticker, falling back to the ticker itself for symbols
/// outside the curated table.
pub fn company_name(symbol: &str) -> &str {
    match symbol {
        "SOFI" => "SoFi Technologies Inc",
        "RBLX" => "Roblox Corporation",
        "LGND" => "Ligand Pharmaceuticals",
        "MAGS" => "Magnet Forensics Inc",
        "STX" => "Seagate Technology",
        "CRDO" => "Credo Technology Group",
        "TSLA" => "Tesla Inc",
        "MP" => "MP Materials Corp",
        "TPR" => "Tapestry Inc",
        "B" => "Barnes Group Inc",
        "ALAB" => "Astera Labs Inc",
        "NMRK" => "Newmark Group Inc",
        "MCHI" => "iShares MSCI China ETF",
        "AFK" => "VanEck Africa Index ETF",
        "LIT" => "Global X Lithium & Battery Tech ETF",
        "NLR" => "VanEck Uranium+Nuclear Energy ETF",
        "TSEM" => "Tower Semiconductor Ltd",
        "XME" => "SPDR S&P Metals & Mining ETF",
        "DAPP" => "VanEck Digital Transformation ETF",
        "SNDK" => "SandRidge Energy Inc",
        "EVR" => "Evercore Inc",
        "IDCC" => "InterDigital Inc",
        "AMG" => "Affiliated Managers Group",
        "APP" => "AppLovin Corporation",
        "BITQ" => "Bitwise Crypto Industry Innovators ETF",
        "PFSI" => "PennyMac Financial Services",
        "BKCH" => "Global X Blockchain ETF",
        "HOOD" => "Robinhood Markets Inc",
        "AXON" => "Axon Enterprise Inc",
        "PLTR" => "Palantir Technologies Inc",
        "PVLA" => "Privata Inc",
        "TREE" => "LendingTree Inc",
        "ENS" => "EnerSys",
        "SHOP" => "Shopify Inc",
        "NET" => "Cloudflare Inc",
        "HIMS" => "Hims & Hers Health Inc",
        "CRWV" => "Crown Electrokinetics Corp",
        "FLEX" => "Flex Ltd",
        "JBL" => "Jabil Inc",
        "RYCEY" => "Rolls-Royce Holdings plc",
        "CLS" => "Celestica Inc",
        "DASH" => "DoorDash Inc",
        "WBD" => "Warner Bros. Discovery Inc",
        "ILF" => "iShares Latin America 40 ETF",
        "SLVP" => "iShares MSCI Global Silver Miners ETF",
        "OKLO" => "Oklo Inc",
        "NEM" => "Newmont Corporation",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn universe_has_no_duplicates() {
        let unique: BTreeSet<_> = WATCHLIST_SYMBOLS.iter().collect();
        assert_eq!(unique.len(), WATCHLIST_SYMBOLS.len());
    }

    #[test]
    fn every_symbol_has_a_curated_name() {
        for symbol in WATCHLIST_SYMBOLS {
            assert_ne!(company_name(symbol), symbol, "missing name for {symbol}");
        }
    }

    #[test]
    fn unknown_symbol_falls_back_to_itself() {
        assert_eq!(company_name("ZZZZ"), "ZZZZ");
    }
}
