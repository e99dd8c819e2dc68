use super::ThemePreset;

pub(super) const EARTH: ThemePreset = ThemePreset {
    theme: "earth",
    defaults: &[
        ("deity_color", "yellow"),
        ("preferred_time", "any"),
        ("environment", "mountainous places"),
        ("primary_biome", "minecraft:stony_peaks"),
        ("secondary_biome", "minecraft:dripstone_caves"),
        ("tertiary_biome", "minecraft:deep_dark"),
        ("primary_effect", "minecraft:resistance"),
        ("secondary_effect", "minecraft:absorption"),
        ("communion_effect_1", "minecraft:resistance"),
        ("communion_effect_2", "minecraft:absorption"),
        ("effect_duration", "600"),
        ("effect_level", "0"),
        ("resource_type", "stones"),
        ("entity_type", "golems"),
        ("ritual_type", "foundation"),
        ("item_type", "gem"),
        ("location_type", "peaks"),
        ("target_entity", "minecraft:iron_golem"),
        ("reward_item_1", "minecraft:diamond"),
        ("count_1", "3"),
        ("reward_item_2", "eidolon:earth_gem"),
        ("count_2", "2"),
        ("reward_item_3", "minecraft:enchanted_book"),
        ("count_3", "1"),
        ("reward_item_4", "minecraft:earth_crystal"),
        ("count_4", "1"),
        ("deity_influence", "stability and growth"),
        ("power_type", "the strength of stone"),
    ],
    literals: &[
        ("speaking_style", "deep rumbling wisdom and ancient patience"),
        ("personality_traits", "steadfast endurance and protective nurturing"),
        ("rewarded_behaviors", "build lasting foundations and protect the innocent"),
        ("sought_qualities", "stability and perseverance"),
        ("follower_benefits", "endurance and protection"),
        ("deity_realm", "deep caverns and towering peaks"),
        ("low_rep_attitude", "wary"),
        ("low_rep_tone", "stony silence"),
        ("mid_low_rep_tone", "measured acceptance"),
        ("mid_rep_benefits", "shelter"),
        ("high_rep_status", "unshakable faith"),
        ("max_rep_rewards", "deepest earth magic and mountain's heart"),
        ("basic_knowledge", "soil and stone"),
        ("intermediate_knowledge", "earth magic"),
        ("advanced_knowledge", "mountain shaping"),
        ("secret_knowledge", "forbidden deep arts"),
        ("curse_effects", "crushing weight and brittle bones"),
        ("opposing_forces", "air and storm deities"),
        ("punishment_effects", "quaking curses"),
        ("blessing_type", "earth blessings"),
        ("optimal_time", "the quiet hours beneath the ground"),
        ("favored_places", "mountain halls and deep caverns"),
        ("special_artifacts", "stone artifacts"),
        ("milestone_gifts", "earth gems"),
        ("devotion_rewards", "living stones and earth crystals"),
        ("opposing_time", "the restless winds"),
        ("authority_level", "immovable"),
        ("biome_description", "towering mountain"),
        ("secondary_description", "echoing cavern"),
        ("tertiary_description", "ancient depths"),
        ("tertiary_reaction", "hum with primordial strength"),
        ("attention_style", "patient attention"),
        ("connection_medium", "bedrock"),
        ("communication_type", "prayer"),
        ("acknowledgment_style", "solemn approval"),
        ("cooldown_reason", "let the stone settle"),
        ("interaction_type", "communion"),
        ("unavailability_reason", "shifting the roots of mountains"),
        ("interference_type", "buried under shifting rock"),
        ("barrier_type", "layers of unyielding stone"),
        ("blessing_description", "the endurance of stone"),
        ("prayer_type", "stone prayer"),
        ("divine_response", "grounding power"),
        ("deity_domain_singular", "earth"),
        ("communion_item_1", "minecraft:emerald"),
        ("communion_item_2", "minecraft:amethyst_shard"),
        ("communion_experience", "the heartbeat of the world"),
        ("communion_medium", "sacred stones"),
        ("shared_knowledge", "the memory of the mountains"),
        ("communion_ritual", "grounding"),
    ],
};
