//! Default word lists.
//!
//! These are plain data. A filter takes its vocabulary from [`DEFAULT_WORDS`] unless it is
//! configured to use only custom words, and always includes [`DEFAULT_EXCEPTIONS`].

/// The built-in vocabulary.
///
/// All entries are lowercase and at least three characters long.
pub const DEFAULT_WORDS: &[&str] = &[
    "arsehole",
    "ass",
    "asshat",
    "asshole",
    "assholes",
    "bastard",
    "bastards",
    "bitch",
    "bitches",
    "bitching",
    "bitchy",
    "bollocks",
    "boner",
    "boob",
    "boobs",
    "bugger",
    "bullshit",
    "butthole",
    "clit",
    "cock",
    "cocks",
    "cocksucker",
    "crap",
    "crappy",
    "cum",
    "cunt",
    "cunts",
    "damn",
    "damned",
    "damnit",
    "dick",
    "dickhead",
    "dicks",
    "dildo",
    "douche",
    "douchebag",
    "dumbass",
    "fag",
    "faggot",
    "fck",
    "feck",
    "fuck",
    "fucked",
    "fucker",
    "fuckers",
    "fuckface",
    "fuckhead",
    "fucking",
    "fucks",
    "fuk",
    "goddamn",
    "handjob",
    "jackass",
    "jerkoff",
    "jizz",
    "knobhead",
    "motherfucker",
    "motherfucking",
    "nigga",
    "nigger",
    "piss",
    "pissed",
    "prick",
    "pussy",
    "retard",
    "shit",
    "shite",
    "shithead",
    "shits",
    "shitty",
    "skank",
    "slut",
    "sluts",
    "twat",
    "wank",
    "wanker",
    "whore",
    "whores",
];

/// Clean words that contain a vocabulary word.
///
/// A match lying entirely inside one of these is discarded.
pub const DEFAULT_EXCEPTIONS: &[&str] = &[
    "babcock",
    "boobytrap",
    "clitheroe",
    "cockatoo",
    "cockatoos",
    "cockburn",
    "cockerel",
    "cockpit",
    "cockpits",
    "cockroach",
    "cockroaches",
    "cocktail",
    "debugger",
    "dickens",
    "dickinson",
    "hancock",
    "hitchcock",
    "matsushita",
    "peacock",
    "penistone",
    "pricklier",
    "retardant",
    "retardation",
    "saltwater",
    "scrapbook",
    "scrapheap",
    "scrapped",
    "scrapping",
    "scrapyard",
    "scunthorpe",
    "shiitake",
    "shiite",
    "shiites",
    "shuttlecock",
    "skyscraper",
    "sniggered",
    "sniggering",
    "swank",
    "woodcock",
];
