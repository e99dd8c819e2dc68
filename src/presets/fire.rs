use super::ThemePreset;

pub(super) const FIRE: ThemePreset = ThemePreset {
    theme: "fire",
    defaults: &[
        ("deity_color", "red"),
        ("preferred_time", "day"),
        ("environment", "blazing places"),
        ("primary_biome", "minecraft:desert"),
        ("secondary_biome", "minecraft:savanna"),
        ("tertiary_biome", "minecraft:nether_wastes"),
        ("primary_effect", "minecraft:fire_resistance"),
        ("secondary_effect", "minecraft:strength"),
        ("communion_effect_1", "minecraft:strength"),
        ("communion_effect_2", "minecraft:fire_resistance"),
        ("effect_duration", "600"),
        ("effect_level", "0"),
        ("resource_type", "flames"),
        ("entity_type", "blazes"),
        ("ritual_type", "inferno"),
        ("item_type", "essence"),
        ("location_type", "volcanoes"),
        ("target_entity", "minecraft:blaze"),
        ("reward_item_1", "minecraft:fire_charge"),
        ("count_1", "8"),
        ("reward_item_2", "eidolon:fire_gem"),
        ("count_2", "2"),
        ("reward_item_3", "minecraft:enchanted_book"),
        ("count_3", "1"),
        ("reward_item_4", "minecraft:fire_crystal"),
        ("count_4", "1"),
        ("deity_influence", "warmth and light"),
        ("power_type", "inner fire"),
    ],
    literals: &[
        ("speaking_style", "crackling intensity and fierce pride"),
        ("personality_traits", "unwavering determination and passionate zeal"),
        ("rewarded_behaviors", "embrace courage and forge their destiny"),
        ("sought_qualities", "inner fire and unbreakable will"),
        ("follower_benefits", "strength and resilience"),
        ("deity_realm", "blazing forges and eternal flames"),
        ("low_rep_attitude", "suspicious"),
        ("low_rep_tone", "cold formality"),
        ("mid_low_rep_tone", "grudging respect"),
        ("mid_rep_benefits", "guidance"),
        ("high_rep_status", "burning faith"),
        ("max_rep_rewards", "greatest fire magic and eternal flame"),
        ("basic_knowledge", "flames"),
        ("intermediate_knowledge", "fire magic"),
        ("advanced_knowledge", "forge mastery"),
        ("secret_knowledge", "forbidden fire arts"),
        ("curse_effects", "burning weakness and scorching pain"),
        ("opposing_forces", "ice and water deities"),
        ("punishment_effects", "blazing curses"),
        ("blessing_type", "fire blessings"),
        ("optimal_time", "the blazing hours of noon"),
        ("favored_places", "volcanic regions and forge-halls"),
        ("special_artifacts", "fire artifacts"),
        ("milestone_gifts", "flame gems"),
        ("devotion_rewards", "blazing essences and fire crystals"),
        ("opposing_time", "the cool darkness"),
        ("authority_level", "absolute"),
        ("biome_description", "scorching desert"),
        ("secondary_description", "sun-baked savanna"),
        ("tertiary_description", "infernal wasteland"),
        ("tertiary_reaction", "sings with familiar fire"),
        ("attention_style", "burning focus"),
        ("connection_medium", "flames"),
        ("communication_type", "prayer"),
        ("acknowledgment_style", "fiery approval"),
        ("cooldown_reason", "rekindle the sacred flames"),
        ("interaction_type", "communion"),
        ("unavailability_reason", "tending the eternal forge"),
        ("interference_type", "dampened by opposing forces"),
        ("barrier_type", "wall of competing elements"),
        ("blessing_description", "protection from flames"),
        ("prayer_type", "fire prayer"),
        ("divine_response", "crackling power"),
        ("deity_domain_singular", "fire"),
        ("communion_item_1", "minecraft:blaze_powder"),
        ("communion_item_2", "minecraft:fire_charge"),
        ("communion_experience", "the heat of creation itself"),
        ("communion_medium", "sacred flames"),
        ("shared_knowledge", "the secrets of eternal fire"),
        ("communion_ritual", "conflagration"),
    ],
};
