// Builtin event table. Payout numbers are the tuned game balance; change
// them and the XP economy shifts with them.

use super::{GameEvent, Payout};
use crate::types::{EventKind, Sentiment, TokenSymbol};

const BASE: GameEvent = GameEvent {
    id: 0,
    kind: EventKind::News,
    title: "",
    description: "",
    token: None,
    potential_gain: None,
    sentiment_effect: None,
    high_risk: false,
    delayed_effect: false,
    payout: Payout::Speculative { multiplier: 2.0 },
    clue: None,
    setback_note: None,
};

pub const MOCK_EVENTS: [GameEvent; 35] = [
    // Negative / loss events
    GameEvent {
        id: 2,
        kind: EventKind::Tweet,
        title: "Influencer Tweet: Promising Project Alert!",
        description: "A popular crypto influencer is hyping a new project with ambitious goals. DYOR!",
        potential_gain: Some("100x (maybe)"),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Influencer hype without substance often leads to pump-and-dumps. Verify the claims."),
        ..BASE
    },
    GameEvent {
        id: 4,
        kind: EventKind::ScamOpportunity,
        title: "Exclusive Presale Invitation",
        description: "An opportunity to invest in a promising new token before it hits the market. Limited spots available! Contract unverified.",
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Unverified contracts are extremely risky and a common sign of scams."),
        ..BASE
    },
    GameEvent {
        id: 7,
        kind: EventKind::News,
        title: "Major Exchange Lists $SAFE",
        description: "$SAFE token has just been listed on a top-tier exchange! Price jumped 30% in the last hour.",
        token: Some(TokenSymbol::Safe),
        high_risk: true,
        delayed_effect: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Investing *after* a major listing pump (\"sell the news\") can be dangerous as early investors take profits."),
        ..BASE
    },
    GameEvent {
        id: 8,
        kind: EventKind::Tweet,
        title: "Elon Mentions Altcoin Project (Yesterday!)",
        description: "Elon Musk tweeted about an altcoin yesterday, causing a massive pump. Is it too late to get in?",
        potential_gain: Some("???"),
        high_risk: true,
        delayed_effect: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Chasing pumps based on old news (even celebrity tweets) is often a losing strategy."),
        ..BASE
    },
    GameEvent {
        id: 10,
        kind: EventKind::ScamOpportunity,
        title: "Yield Farm Offering 1000% APY",
        description: "New farm just launched offering insane returns on $XYZ staking. Deposit requires approving unlimited token spend.",
        potential_gain: Some("1000% APY!"),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Unsustainably high APYs and requests for unlimited token approvals are major red flags for scams."),
        ..BASE
    },
    GameEvent {
        id: 13,
        kind: EventKind::NftOpportunity,
        title: "NFT Floor Price Speculation",
        description: "Talk of a major influencer sweeping the floor of the \"Bored YC Kittens\" collection. Maybe pump incoming?",
        high_risk: true,
        delayed_effect: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Speculating on NFT floor prices based on rumors is extremely risky and akin to gambling."),
        ..BASE
    },
    GameEvent {
        id: 14,
        kind: EventKind::NftOpportunity,
        title: "\"Free\" NFT Claim Available",
        description: "Claim your free commemorative NFT by connecting your wallet and signing the transaction. Looks legit?",
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("\"Free\" mints requiring transaction signing (especially approvals) are often wallet drainer scams."),
        ..BASE
    },
    GameEvent {
        id: 15,
        kind: EventKind::Exploit,
        title: "Protocol Hack Reported",
        description: "Breaking news: A popular DeFi protocol has been exploited. Token price is tanking.",
        token: Some(TokenSymbol::Safe),
        sentiment_effect: Some(Sentiment::Panic),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Investing in hacked projects, even after a price drop, is very risky until the vulnerability is fixed and funds are potentially recovered."),
        ..BASE
    },
    GameEvent {
        id: 18,
        kind: EventKind::DaoDrama,
        title: "Dev Threatens to Fork",
        description: "Lead developer of GARBAGECOIN is threatening to fork the project after a community disagreement.",
        token: Some(TokenSymbol::Garbage),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Internal project conflicts and fork threats often negatively impact token price due to uncertainty and division."),
        ..BASE
    },
    GameEvent {
        id: 19,
        kind: EventKind::ScamOpportunity,
        title: "Telegram \"Signal Group\" Tip",
        description: "Got a \"guaranteed 5x\" signal from a private Telegram group. Requires buying a low-cap token immediately.",
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Paid \"signal groups\" are often pump-and-dump schemes orchestrating exit liquidity for insiders."),
        ..BASE
    },
    GameEvent {
        id: 22,
        kind: EventKind::Microcap,
        title: "New Microcap Gem? (100k Mcap)",
        description: "Found a token with a tiny market cap. Devs seem active on Telegram. Could this be the next 1000x?",
        potential_gain: Some("1000x?"),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Extremely low market cap tokens are highly volatile and susceptible to manipulation or abandonment (\"rug pull\"). Risk is immense."),
        ..BASE
    },
    GameEvent {
        id: 23,
        kind: EventKind::Exploit,
        title: "Flash Loan Exploit on DEX",
        description: "A DEX pool involving $SAFE was just exploited using a flash loan, manipulating the price temporarily.",
        token: Some(TokenSymbol::Safe),
        sentiment_effect: Some(Sentiment::Panic),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Flash loan exploits can cause extreme, temporary price volatility. Trading during such events is dangerous."),
        ..BASE
    },
    GameEvent {
        id: 24,
        kind: EventKind::DaoDrama,
        title: "DAO Treasury Debate Heated",
        description: "Major disagreement in the GARBAGECOIN DAO over how to spend treasury funds. Contentious vote upcoming.",
        token: Some(TokenSymbol::Garbage),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Contentious DAO governance can signal instability and potentially lead to negative price action or forks."),
        ..BASE
    },
    GameEvent {
        id: 25,
        kind: EventKind::Rumor,
        title: "Token Unlock Approaching",
        description: "Large token unlock schedule for early investors of $CLOWN is coming next week.",
        token: Some(TokenSymbol::Clown),
        high_risk: true,
        delayed_effect: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Large token unlocks often lead to selling pressure as early investors cash out, potentially decreasing the price."),
        ..BASE
    },
    GameEvent {
        id: 27,
        kind: EventKind::NftOpportunity,
        title: "NFT Project \"Migrates\" to V2",
        description: "The \"Sad Shibas\" NFT project announced a V2 migration. Holders need to burn V1 and mint V2. Some fees apply.",
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("V2 migrations can sometimes be legitimate upgrades, but are also used as tactics in slow rug pulls or cash grabs. Investigate the reasons and fees."),
        ..BASE
    },
    GameEvent {
        id: 28,
        kind: EventKind::ScamOpportunity,
        title: "Airdrop Claim Requires Seed Phrase",
        description: "A website claims you're eligible for a huge $SAFE airdrop, but requires entering your seed phrase to verify.",
        potential_gain: Some("Free Tokens!"),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("NEVER enter your seed phrase on any website. This is ALWAYS a scam to steal your funds."),
        ..BASE
    },
    GameEvent {
        id: 29,
        kind: EventKind::News,
        title: "Competitor Project Gains Traction",
        description: "A major competitor to Project CLOWNCHAIN seems to be gaining significant user adoption.",
        token: Some(TokenSymbol::Clown),
        high_risk: true,
        payout: Payout::GuaranteedLoss,
        clue: Some("Strong competition can negatively impact a project's market share and token price if they fail to innovate or retain users."),
        ..BASE
    },
    GameEvent {
        id: 6,
        kind: EventKind::MarketShift,
        title: "Market Euphoria!",
        description: "Green candles everywhere! A wave of optimism sweeps through the crypto space.",
        sentiment_effect: Some(Sentiment::Euphoric),
        payout: Payout::FixedLoss {
            severity: 0.6,
            ponzi_penalty: 5,
        },
        clue: Some("Extreme euphoria often signals a market top. Buying during peak hype is very risky (Exit Liquidity). Bear markets are born in euphoria."),
        setback_note: Some("Bought the top during Market Euphoria! Remember: Bear markets are born in euphoria."),
        ..BASE
    },
    // Positive / potential profit events
    GameEvent {
        id: 1,
        kind: EventKind::Rumor,
        title: "Rumor Mill: New Altcoin Gaining Traction",
        description: "Whispers on CryptoX suggest a new altcoin could be the next big thing. Dev wallet holds 50% of supply.",
        potential_gain: Some("5x-10x?"),
        high_risk: true,
        payout: Payout::Speculative { multiplier: 3.0 },
        clue: Some("High dev wallet concentration often signals centralization risk or potential dump."),
        ..BASE
    },
    GameEvent {
        id: 5,
        kind: EventKind::Rumor,
        title: "Tech Breakthrough Announced",
        description: "Reports of a significant technological advancement in a lesser-known project emerge. Seems legit?",
        token: Some(TokenSymbol::Garbage),
        payout: Payout::Speculative { multiplier: 2.5 },
        clue: Some("Genuine tech advancements can drive value, assuming the report is accurate."),
        ..BASE
    },
    GameEvent {
        id: 9,
        kind: EventKind::News,
        title: "Project Audit Results Released",
        description: "Project CLOWNCHAIN passed its security audit! Report looks clean.",
        token: Some(TokenSymbol::Clown),
        payout: Payout::GuaranteedProfit { multiplier: 1.3 },
        clue: Some("A successful audit from a reputable firm reduces security risks, but doesn't guarantee price appreciation. Small profit potential."),
        ..BASE
    },
    GameEvent {
        id: 11,
        kind: EventKind::MarketShift,
        title: "Massive Liquidation Cascade",
        description: "Panic selling triggers a cascade of liquidations across major platforms. Sentiment is rock bottom.",
        sentiment_effect: Some(Sentiment::Panic),
        payout: Payout::Contrarian { multiplier: 3.5 },
        clue: Some("Panic selling can present buying opportunities (\"buy the dip\" or \"buy when there is blood in the streets\"), but timing is critical and risky. Ensure the project fundamentals remain sound. Bull markets are often born in depression like this."),
        ..BASE
    },
    GameEvent {
        id: 12,
        kind: EventKind::NftOpportunity,
        title: "Hyped NFT Mint LIVE!",
        description: "A new PFP project with huge Discord buzz is minting now! Floor could 10x, or go to zero.",
        potential_gain: Some("10x?"),
        high_risk: true,
        delayed_effect: true,
        payout: Payout::ColdMarketFlop {
            multiplier: 4.5,
            severity: 0.8,
            ponzi_penalty: 10,
        },
        clue: Some("NFT mints are highly volatile. Success often depends on timing, overall market sentiment, and team execution, not just hype."),
        setback_note: Some("The NFT market was too cold for 'Hyped NFT Mint LIVE!' to succeed."),
        ..BASE
    },
    GameEvent {
        id: 16,
        kind: EventKind::Rumor,
        title: "Partnership Speculation",
        description: "Rumors swirling about a potential partnership between Project CLOWNCHAIN and a major tech company.",
        token: Some(TokenSymbol::Clown),
        delayed_effect: true,
        payout: Payout::Speculative { multiplier: 2.2 },
        clue: Some("Partnership rumors can pump prices, but gains often fade if the partnership isn't confirmed or impactful (\"buy the rumor, sell the news\")."),
        ..BASE
    },
    GameEvent {
        id: 21,
        kind: EventKind::UtilityLaunch,
        title: "Project XYZ Launches Mainnet App",
        description: "After months of development, Project XYZ has launched its utility application on mainnet.",
        token: Some(TokenSymbol::Xyz),
        payout: Payout::GuaranteedProfit { multiplier: 1.8 },
        clue: Some("Successful mainnet launches *can* drive price if the utility gains adoption, but often the hype is already priced in."),
        ..BASE
    },
    GameEvent {
        id: 26,
        kind: EventKind::Tweet,
        title: "Mysterious Dev Tweet",
        description: "Lead dev of $XYZ tweeted a cryptic message: \"Big things coming. Phase 2 imminent.\" Vague!",
        token: Some(TokenSymbol::Xyz),
        high_risk: true,
        payout: Payout::Speculative { multiplier: 2.0 },
        clue: Some("Vague, hype-driven tweets without concrete details are often used to pump prices short-term. Be wary of \"announcements of announcements\"."),
        ..BASE
    },
    GameEvent {
        id: 30,
        kind: EventKind::MarketShift,
        title: "Fear & Greed Index at \"Extreme Fear\"",
        description: "The Crypto Fear & Greed Index has dropped to \"Extreme Fear\" levels amidst market declines.",
        sentiment_effect: Some(Sentiment::Panic),
        high_risk: true,
        payout: Payout::Contrarian { multiplier: 3.2 },
        clue: Some("\"Extreme Fear\" can indicate maximum pessimism, potentially signaling a market bottom (Contrarian Indicator). Buying here is risky but can be rewarding."),
        ..BASE
    },
    GameEvent {
        id: 31,
        kind: EventKind::PositiveDevelopment,
        title: "Community Grant Approved for Project XYZ!",
        description: "Project XYZ has successfully secured a significant development grant from a well-known foundation. Funds will be used for scaling and new features.",
        token: Some(TokenSymbol::Xyz),
        payout: Payout::GuaranteedProfit { multiplier: 2.0 },
        clue: Some("Grants provide resources and signal external validation for a project, often leading to positive sentiment and development progress."),
        ..BASE
    },
    GameEvent {
        id: 32,
        kind: EventKind::PositiveDevelopment,
        title: "Successful Protocol Upgrade Deployed",
        description: "Project CLOWNCHAIN just deployed a major protocol upgrade, improving efficiency and adding new functionality. No issues reported.",
        token: Some(TokenSymbol::Clown),
        payout: Payout::GuaranteedProfit { multiplier: 1.6 },
        clue: Some("Smooth protocol upgrades can boost investor confidence and attract new users by demonstrating technical competence and progress."),
        ..BASE
    },
    GameEvent {
        id: 33,
        kind: EventKind::News,
        title: "Positive Regulatory Clarity Emerges",
        description: "A government agency released a statement clarifying some regulations around DeFi, which is being interpreted positively by the market.",
        payout: Payout::GuaranteedProfit { multiplier: 1.5 },
        clue: Some("Positive regulatory news can reduce uncertainty and attract institutional interest, often leading to market upticks."),
        ..BASE
    },
    GameEvent {
        id: 34,
        kind: EventKind::Rumor,
        title: "Whale Accumulation Detected for GARBAGECOIN",
        description: "On-chain data suggests a few large wallets (whales) have been steadily accumulating GARBAGECOIN over the past week.",
        token: Some(TokenSymbol::Garbage),
        payout: Payout::Speculative { multiplier: 2.8 },
        clue: Some("Whale accumulation can sometimes precede price pumps as large holders anticipate positive news or try to drive up the price. However, it can also be market manipulation."),
        ..BASE
    },
    GameEvent {
        id: 35,
        kind: EventKind::NftOpportunity,
        title: "Blue-Chip NFT Project Announces Airdrop for Holders",
        description: "Holders of the \"CryptoPunks V3\" NFT collection will receive an airdrop of new \"PunkDoge\" tokens. Speculation is driving up Punk V3 prices.",
        payout: Payout::Speculative { multiplier: 1.9 },
        clue: Some("Airdrops from established projects can generate significant value for holders, often causing the price of the parent NFT or token to increase in anticipation."),
        ..BASE
    },
    // Neutral / context events
    GameEvent {
        id: 3,
        kind: EventKind::MarketShift,
        title: "Market Jitters",
        description: "Uncertainty looms as regulatory discussions intensify. Market sentiment showing signs of turning bearish.",
        sentiment_effect: Some(Sentiment::Bearish),
        payout: Payout::FixedLoss {
            severity: 0.2,
            ponzi_penalty: 0,
        },
        clue: Some("Investing during market uncertainty or \"jitters\" is often risky as sentiment can sour quickly. Bear markets are born in euphoria and bull markets are born in depression."),
        setback_note: Some("Investing during Market Jitters proved too risky."),
        ..BASE
    },
    GameEvent {
        id: 17,
        kind: EventKind::MarketShift,
        title: "Stablecoin Depegs Slightly",
        description: "A major stablecoin briefly lost its peg, causing some market instability.",
        sentiment_effect: Some(Sentiment::Bearish),
        payout: Payout::FixedLoss {
            severity: 0.1,
            ponzi_penalty: 0,
        },
        clue: Some("Stablecoin depegs can cause widespread panic and negatively impact even unrelated assets due to loss of confidence."),
        setback_note: Some("Investing during the stablecoin depeg was risky."),
        ..BASE
    },
    GameEvent {
        id: 20,
        kind: EventKind::News,
        title: "New Regulation Proposed",
        description: "Governments are discussing new regulations for DeFi. Market is reacting cautiously.",
        sentiment_effect: Some(Sentiment::Neutral),
        payout: Payout::FixedLoss {
            severity: 0.05,
            ponzi_penalty: 0,
        },
        clue: Some("Regulatory news can create long-term uncertainty or opportunity. The impact depends heavily on the specifics of the regulation."),
        setback_note: Some("The market reacted poorly to the proposed regulation."),
        ..BASE
    },
];
