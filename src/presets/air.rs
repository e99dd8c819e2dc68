use super::ThemePreset;

pub(super) const AIR: ThemePreset = ThemePreset {
    theme: "air",
    defaults: &[
        ("deity_color", "white"),
        ("preferred_time", "day"),
        ("environment", "high places"),
        ("primary_biome", "minecraft:windswept_hills"),
        ("secondary_biome", "minecraft:plains"),
        ("tertiary_biome", "minecraft:jagged_peaks"),
        ("primary_effect", "minecraft:slow_falling"),
        ("secondary_effect", "minecraft:speed"),
        ("communion_effect_1", "minecraft:speed"),
        ("communion_effect_2", "minecraft:jump_boost"),
        ("effect_duration", "600"),
        ("effect_level", "0"),
        ("resource_type", "feathers"),
        ("entity_type", "phantoms"),
        ("ritual_type", "tempest"),
        ("item_type", "shard"),
        ("location_type", "peaks"),
        ("target_entity", "minecraft:phantom"),
        ("reward_item_1", "minecraft:elytra"),
        ("count_1", "1"),
        ("reward_item_2", "eidolon:air_gem"),
        ("count_2", "2"),
        ("reward_item_3", "minecraft:enchanted_book"),
        ("count_3", "1"),
        ("reward_item_4", "minecraft:wind_crystal"),
        ("count_4", "1"),
        ("deity_influence", "freedom and motion"),
        ("power_type", "the open sky"),
    ],
    literals: &[
        ("speaking_style", "swift intensity and boundless freedom"),
        ("personality_traits", "restless energy and unlimited potential"),
        ("rewarded_behaviors", "embrace freedom and reach new heights"),
        ("sought_qualities", "independence and vision"),
        ("follower_benefits", "swiftness and clarity"),
        ("deity_realm", "endless skies and storm clouds"),
        ("low_rep_attitude", "dismissive"),
        ("low_rep_tone", "passing indifference"),
        ("mid_low_rep_tone", "curious interest"),
        ("mid_rep_benefits", "tailwinds"),
        ("high_rep_status", "soaring faith"),
        ("max_rep_rewards", "greatest wind magic and the gift of flight"),
        ("basic_knowledge", "breezes"),
        ("intermediate_knowledge", "wind magic"),
        ("advanced_knowledge", "storm riding"),
        ("secret_knowledge", "forbidden sky arts"),
        ("curse_effects", "stifling stillness and sudden falls"),
        ("opposing_forces", "earth and stone deities"),
        ("punishment_effects", "howling curses"),
        ("blessing_type", "wind blessings"),
        ("optimal_time", "the bright hours of open sky"),
        ("favored_places", "mountain summits and cloud-high towers"),
        ("special_artifacts", "wind artifacts"),
        ("milestone_gifts", "sky gems"),
        ("devotion_rewards", "captured gales and wind crystals"),
        ("opposing_time", "the heavy stillness of night"),
        ("authority_level", "unbound"),
        ("biome_description", "windswept highland"),
        ("secondary_description", "open plain"),
        ("tertiary_description", "jagged summit"),
        ("tertiary_reaction", "roars with familiar gales"),
        ("attention_style", "fleeting focus"),
        ("connection_medium", "winds"),
        ("communication_type", "prayer"),
        ("acknowledgment_style", "breezy approval"),
        ("cooldown_reason", "gather the scattered winds"),
        ("interaction_type", "communion"),
        ("unavailability_reason", "racing across distant skies"),
        ("interference_type", "scattered by crosswinds"),
        ("barrier_type", "wall of still air"),
        ("blessing_description", "lightness on the wind"),
        ("prayer_type", "wind prayer"),
        ("divine_response", "rushing power"),
        ("deity_domain_singular", "air"),
        ("communion_item_1", "minecraft:feather"),
        ("communion_item_2", "minecraft:phantom_membrane"),
        ("communion_experience", "the boundless rush of the sky"),
        ("communion_medium", "sacred winds"),
        ("shared_knowledge", "the songs of the high winds"),
        ("communion_ritual", "skyward ascent"),
    ],
};
