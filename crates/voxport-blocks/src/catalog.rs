//! Built-in registrations for the legacy (numeric ID + 4-bit data) block catalogue.

use voxport_geom::{Face, QuarterTurn};

use crate::bits::{bit_set, bits};
use crate::registry::{BlockBehavior, BlockRegistry};
use crate::textures::{FaceTextures, TextureTable};
use crate::types::{BlockId, BlockState, LayerHeight, LiquidFamily, RailKind, Shape};

const COLORS: [&str; 16] = [
    "white",
    "orange",
    "magenta",
    "light_blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "silver",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

const PLANKS: [&str; 6] = [
    "planks_oak",
    "planks_spruce",
    "planks_birch",
    "planks_jungle",
    "planks_acacia",
    "planks_big_oak",
];

pub(crate) fn vanilla() -> BlockRegistry {
    let mut reg = BlockRegistry::new();
    terrain(&mut reg);
    building(&mut reg);
    colored(&mut reg);
    oriented(&mut reg);
    stairs_and_slabs(&mut reg);
    thin(&mut reg);
    plants(&mut reg);
    liquids(&mut reg);
    reg
}

fn solid(reg: &mut BlockRegistry, id: BlockId, name: &str, faces: &[&str]) {
    reg.register(
        id,
        BlockBehavior::solid(name, TextureTable::uniform(FaceTextures::new(faces))),
    );
}

fn clear(reg: &mut BlockRegistry, id: BlockId, name: &str, table: TextureTable) {
    reg.register(id, BlockBehavior::clear(name, table));
}

fn shaped(reg: &mut BlockRegistry, id: BlockId, name: &str, shape: Shape, table: TextureTable) {
    reg.register(id, BlockBehavior::new(name, shape, table));
}

fn color_names(fmt: impl Fn(&str) -> String) -> Vec<String> {
    COLORS.into_iter().map(fmt).collect()
}

fn as_strs(v: &[String]) -> Vec<&str> {
    v.iter().map(String::as_str).collect()
}

/// Column-like block (logs, pillars, hay) lying along `axis`: 0 = Y, 1 = X, 2 = Z, 3 = all bark.
fn pillar(side: &str, end: &str, axis: u8) -> FaceTextures {
    match axis {
        0 => FaceTextures::new(&[end, end, side]),
        1 => FaceTextures::new(&[side])
            .with_face(Face::PosX, end)
            .with_face(Face::NegX, end)
            .with_rotation(Face::PosY, QuarterTurn::R90)
            .with_rotation(Face::NegY, QuarterTurn::R90)
            .with_rotation(Face::PosZ, QuarterTurn::R90)
            .with_rotation(Face::NegZ, QuarterTurn::R90),
        2 => FaceTextures::new(&[side])
            .with_face(Face::PosZ, end)
            .with_face(Face::NegZ, end)
            .with_rotation(Face::PosX, QuarterTurn::R90)
            .with_rotation(Face::NegX, QuarterTurn::R90),
        _ => FaceTextures::new(&[side]),
    }
}

/// Box with a distinguished front face and plain sides.
fn fronted(front: &str, top: &str, side: &str, facing: Face) -> FaceTextures {
    FaceTextures::new(&[top, top, side]).with_face(facing, front)
}

/// Six-way facing used by dispensers and droppers (low 3 bits).
fn six_way(state: BlockState) -> Option<Face> {
    match bits(state, 5, 3) {
        0 => Some(Face::NegY),
        1 => Some(Face::PosY),
        2 => Some(Face::NegZ),
        3 => Some(Face::PosZ),
        4 => Some(Face::NegX),
        5 => Some(Face::PosX),
        _ => None,
    }
}

fn terrain(reg: &mut BlockRegistry) {
    reg.register(
        1,
        BlockBehavior::solid(
            "stone",
            TextureTable::variants(&[
                "stone",
                "stone_granite",
                "stone_granite_smooth",
                "stone_diorite",
                "stone_diorite_smooth",
                "stone_andesite",
                "stone_andesite_smooth",
            ]),
        ),
    );
    solid(reg, 2, "grass", &["grass_top", "dirt", "grass_side"]);
    reg.register(
        3,
        BlockBehavior::solid(
            "dirt",
            TextureTable::variants(&["dirt", "coarse_dirt"]).with_state(
                2,
                FaceTextures::new(&["dirt_podzol_top", "dirt", "dirt_podzol_side"]),
            ),
        ),
    );
    solid(reg, 4, "cobblestone", &["cobblestone"]);
    solid(reg, 7, "bedrock", &["bedrock"]);
    reg.register(
        12,
        BlockBehavior::solid("sand", TextureTable::variants(&["sand", "red_sand"])),
    );
    solid(reg, 13, "gravel", &["gravel"]);
    solid(reg, 14, "gold_ore", &["gold_ore"]);
    solid(reg, 15, "iron_ore", &["iron_ore"]);
    solid(reg, 16, "coal_ore", &["coal_ore"]);
    solid(reg, 21, "lapis_ore", &["lapis_ore"]);
    solid(reg, 56, "diamond_ore", &["diamond_ore"]);
    solid(reg, 73, "redstone_ore", &["redstone_ore"]);
    solid(reg, 74, "lit_redstone_ore", &["redstone_ore"]);
    clear(reg, 79, "ice", TextureTable::single("ice"));
    solid(reg, 80, "snow", &["snow"]);
    solid(reg, 82, "clay", &["clay"]);
    solid(reg, 87, "netherrack", &["netherrack"]);
    solid(reg, 88, "soul_sand", &["soul_sand"]);
    solid(reg, 110, "mycelium", &["mycelium_top", "dirt", "mycelium_side"]);
    solid(reg, 121, "end_stone", &["end_stone"]);
    solid(reg, 129, "emerald_ore", &["emerald_ore"]);
    solid(reg, 153, "quartz_ore", &["quartz_ore"]);
    solid(reg, 174, "packed_ice", &["ice_packed"]);
    reg.register(
        18,
        BlockBehavior::clear(
            "leaves",
            TextureTable::from_fn(|s| {
                let names = ["leaves_oak", "leaves_spruce", "leaves_birch", "leaves_jungle"];
                Some(FaceTextures::uniform(names[bits(s, 6, 2) as usize]))
            }),
        ),
    );
    reg.register(
        161,
        BlockBehavior::clear(
            "leaves2",
            TextureTable::from_fn(|s| {
                ["leaves_acacia", "leaves_big_oak"]
                    .get(bits(s, 6, 2) as usize)
                    .map(|n| FaceTextures::uniform(n))
            }),
        ),
    );
    shaped(
        reg,
        78,
        "snow_layer",
        Shape::Layer {
            height: LayerHeight::Eighths,
        },
        TextureTable::single("snow"),
    );
    shaped(
        reg,
        60,
        "farmland",
        Shape::Layer {
            height: LayerHeight::Fixed(15.0 / 16.0),
        },
        TextureTable::from_fn(|s| {
            let top = if s == 0 { "farmland_dry" } else { "farmland_wet" };
            Some(FaceTextures::new(&[top, "dirt", "dirt"]))
        }),
    );
}

fn building(reg: &mut BlockRegistry) {
    reg.register(5, BlockBehavior::solid("planks", TextureTable::variants(&PLANKS)));
    reg.register(
        19,
        BlockBehavior::solid("sponge", TextureTable::variants(&["sponge", "sponge_wet"])),
    );
    clear(reg, 20, "glass", TextureTable::single("glass"));
    solid(reg, 22, "lapis_block", &["lapis_block"]);
    reg.register(
        24,
        BlockBehavior::solid(
            "sandstone",
            TextureTable::from_fn(|s| {
                ["sandstone_normal", "sandstone_carved", "sandstone_smooth"]
                    .get(s as usize)
                    .map(|side| FaceTextures::new(&["sandstone_top", "sandstone_bottom", *side]))
            }),
        ),
    );
    solid(reg, 25, "noteblock", &["noteblock"]);
    solid(reg, 41, "gold_block", &["gold_block"]);
    solid(reg, 42, "iron_block", &["iron_block"]);
    solid(reg, 45, "brick_block", &["brick"]);
    solid(reg, 46, "tnt", &["tnt_top", "tnt_bottom", "tnt_side"]);
    solid(reg, 47, "bookshelf", &["planks_oak", "planks_oak", "bookshelf"]);
    solid(reg, 48, "mossy_cobblestone", &["cobblestone_mossy"]);
    solid(reg, 49, "obsidian", &["obsidian"]);
    clear(reg, 52, "mob_spawner", TextureTable::single("mob_spawner"));
    solid(reg, 57, "diamond_block", &["diamond_block"]);
    solid(
        reg,
        58,
        "crafting_table",
        &[
            "crafting_table_top",
            "planks_oak",
            "crafting_table_side",
            "crafting_table_side",
            "crafting_table_front",
            "crafting_table_front",
        ],
    );
    solid(reg, 89, "glowstone", &["glowstone"]);
    reg.register(
        98,
        BlockBehavior::solid(
            "stonebrick",
            TextureTable::variants(&[
                "stonebrick",
                "stonebrick_mossy",
                "stonebrick_cracked",
                "stonebrick_carved",
            ]),
        ),
    );
    solid(reg, 103, "melon_block", &["melon_top", "melon_top", "melon_side"]);
    solid(reg, 112, "nether_brick", &["nether_brick"]);
    solid(reg, 133, "emerald_block", &["emerald_block"]);
    solid(reg, 152, "redstone_block", &["redstone_block"]);
    reg.register(
        155,
        BlockBehavior::solid(
            "quartz_block",
            TextureTable::from_fn(|s| match s {
                0 => Some(FaceTextures::new(&[
                    "quartz_block_top",
                    "quartz_block_bottom",
                    "quartz_block_side",
                ])),
                1 => Some(FaceTextures::new(&[
                    "quartz_block_chiseled_top",
                    "quartz_block_chiseled_top",
                    "quartz_block_chiseled",
                ])),
                2..=4 => Some(pillar(
                    "quartz_block_lines",
                    "quartz_block_lines_top",
                    s - 2,
                )),
                _ => None,
            }),
        ),
    );
    reg.register(
        168,
        BlockBehavior::solid(
            "prismarine",
            TextureTable::variants(&["prismarine_rough", "prismarine_bricks", "prismarine_dark"]),
        ),
    );
    solid(reg, 169, "sea_lantern", &["sea_lantern"]);
    solid(reg, 172, "hardened_clay", &["hardened_clay"]);
    solid(reg, 173, "coal_block", &["coal_block"]);
    reg.register(
        179,
        BlockBehavior::solid(
            "red_sandstone",
            TextureTable::from_fn(|s| {
                ["red_sandstone_normal", "red_sandstone_carved", "red_sandstone_smooth"]
                    .get(s as usize)
                    .map(|side| {
                        FaceTextures::new(&["red_sandstone_top", "red_sandstone_bottom", *side])
                    })
            }),
        ),
    );
    solid(reg, 201, "purpur_block", &["purpur_block"]);
    solid(reg, 206, "end_bricks", &["end_bricks"]);
    solid(reg, 214, "nether_wart_block", &["nether_wart_block"]);
    solid(reg, 215, "red_nether_brick", &["red_nether_brick"]);
}

fn colored(reg: &mut BlockRegistry) {
    let wool = color_names(|c| format!("wool_colored_{c}"));
    reg.register(35, BlockBehavior::solid("wool", TextureTable::variants(&as_strs(&wool))));
    shaped(
        reg,
        171,
        "carpet",
        Shape::Layer {
            height: LayerHeight::Fixed(1.0 / 16.0),
        },
        TextureTable::variants(&as_strs(&wool)),
    );

    let clay = color_names(|c| format!("hardened_clay_stained_{c}"));
    reg.register(
        159,
        BlockBehavior::solid("stained_hardened_clay", TextureTable::variants(&as_strs(&clay))),
    );

    let glass = color_names(|c| format!("glass_{c}"));
    clear(reg, 95, "stained_glass", TextureTable::variants(&as_strs(&glass)));

    let pane_tops = color_names(|c| format!("glass_pane_top_{c}"));
    shaped(
        reg,
        160,
        "stained_glass_pane",
        Shape::Pane,
        TextureTable::from_fn(|s| {
            let i = s as usize;
            (i < COLORS.len()).then(|| {
                let top = pane_tops[i].as_str();
                FaceTextures::new(&[top, top, glass[i].as_str()])
            })
        }),
    );
}

fn oriented(reg: &mut BlockRegistry) {
    // Logs: bits 0-1 wood type, bits 2-3 axis.
    fn logs(types: &'static [&'static str]) -> TextureTable {
        TextureTable::from_fn(|s| {
            let t = types.get(bits(s, 6, 2) as usize)?;
            Some(pillar(&format!("log_{t}"), &format!("log_{t}_top"), bits(s, 4, 2)))
        })
    }
    reg.register(17, BlockBehavior::solid("log", logs(&["oak", "spruce", "birch", "jungle"])));
    reg.register(162, BlockBehavior::solid("log2", logs(&["acacia", "big_oak"])));

    let axis_only = |side: &'static str, end: &'static str| {
        TextureTable::from_fn(move |s| Some(pillar(side, end, bits(s, 4, 2))))
    };
    reg.register(
        170,
        BlockBehavior::solid("hay_block", axis_only("hay_block_side", "hay_block_top")),
    );
    reg.register(
        216,
        BlockBehavior::solid("bone_block", axis_only("bone_block_side", "bone_block_top")),
    );
    reg.register(
        202,
        BlockBehavior::solid(
            "purpur_pillar",
            axis_only("purpur_pillar", "purpur_pillar_top"),
        ),
    );

    let dispensing = |front_h: &'static str, front_v: &'static str| {
        TextureTable::from_fn(move |s| {
            let facing = six_way(s)?;
            let front = if facing.is_horizontal() { front_h } else { front_v };
            Some(fronted(front, "furnace_top", "furnace_side", facing))
        })
    };
    reg.register(
        23,
        BlockBehavior::solid(
            "dispenser",
            dispensing("dispenser_front_horizontal", "dispenser_front_vertical"),
        ),
    );
    reg.register(
        158,
        BlockBehavior::solid(
            "dropper",
            dispensing("dropper_front_horizontal", "dropper_front_vertical"),
        ),
    );

    // Furnaces only define the four horizontal facings.
    let furnace = |front: &'static str| {
        TextureTable::from_fn(move |s| {
            let facing = six_way(s).filter(|f| f.is_horizontal())?;
            Some(fronted(front, "furnace_top", "furnace_side", facing))
        })
    };
    reg.register(61, BlockBehavior::solid("furnace", furnace("furnace_front_off")));
    reg.register(62, BlockBehavior::solid("lit_furnace", furnace("furnace_front_on")));

    let pumpkin = |front: &'static str| {
        TextureTable::from_fn(move |s| {
            let facing = [Face::PosZ, Face::NegX, Face::NegZ, Face::PosX][bits(s, 6, 2) as usize];
            Some(fronted(front, "pumpkin_top", "pumpkin_side", facing))
        })
    };
    reg.register(86, BlockBehavior::solid("pumpkin", pumpkin("pumpkin_face_off")));
    reg.register(91, BlockBehavior::solid("lit_pumpkin", pumpkin("pumpkin_face_on")));
}

fn stairs_and_slabs(reg: &mut BlockRegistry) {
    let stairs: [(BlockId, &str, &[&str]); 14] = [
        (53, "oak_stairs", &["planks_oak"]),
        (67, "stone_stairs", &["cobblestone"]),
        (108, "brick_stairs", &["brick"]),
        (109, "stone_brick_stairs", &["stonebrick"]),
        (114, "nether_brick_stairs", &["nether_brick"]),
        (
            128,
            "sandstone_stairs",
            &["sandstone_top", "sandstone_bottom", "sandstone_normal"],
        ),
        (134, "spruce_stairs", &["planks_spruce"]),
        (135, "birch_stairs", &["planks_birch"]),
        (136, "jungle_stairs", &["planks_jungle"]),
        (
            156,
            "quartz_stairs",
            &["quartz_block_top", "quartz_block_bottom", "quartz_block_side"],
        ),
        (163, "acacia_stairs", &["planks_acacia"]),
        (164, "dark_oak_stairs", &["planks_big_oak"]),
        (
            180,
            "red_sandstone_stairs",
            &["red_sandstone_top", "red_sandstone_bottom", "red_sandstone_normal"],
        ),
        (203, "purpur_stairs", &["purpur_block"]),
    ];
    for (id, name, faces) in stairs {
        shaped(reg, id, name, Shape::Stairs, TextureTable::uniform(FaceTextures::new(faces)));
    }

    // Stone slab family: bits 0-2 material.
    let stone_materials: [&[&str]; 8] = [
        &["stone_slab_top", "stone_slab_top", "stone_slab_side"],
        &["sandstone_top", "sandstone_bottom", "sandstone_normal"],
        &["planks_oak"],
        &["cobblestone"],
        &["brick"],
        &["stonebrick"],
        &["nether_brick"],
        &["quartz_block_top", "quartz_block_bottom", "quartz_block_side"],
    ];
    let by_material = |s: BlockState| Some(FaceTextures::new(stone_materials[(s & 7) as usize]));
    reg.register(
        44,
        BlockBehavior::new("stone_slab", Shape::Slab, TextureTable::from_fn(by_material)),
    );
    reg.register_states(
        43,
        0..=7,
        BlockBehavior::solid("double_stone_slab", TextureTable::from_fn(by_material)),
    );
    // Smooth variants: only stone, sandstone and quartz have a seamless texture.
    reg.register_states(
        43,
        8..=15,
        BlockBehavior::solid(
            "smooth_double_stone_slab",
            TextureTable::empty()
                .with_state(8, FaceTextures::uniform("stone_slab_top"))
                .with_state(9, FaceTextures::uniform("sandstone_top"))
                .with_state(15, FaceTextures::uniform("quartz_block_top")),
        ),
    );

    let planks = |s: BlockState| PLANKS.get((s & 7) as usize).map(|p| FaceTextures::uniform(p));
    reg.register(125, BlockBehavior::solid("double_wooden_slab", TextureTable::from_fn(planks)));
    reg.register(
        126,
        BlockBehavior::new("wooden_slab", Shape::Slab, TextureTable::from_fn(planks)),
    );

    let red_sandstone = FaceTextures::new(&[
        "red_sandstone_top",
        "red_sandstone_bottom",
        "red_sandstone_normal",
    ]);
    reg.register(
        181,
        BlockBehavior::solid("double_stone_slab2", TextureTable::uniform(red_sandstone.clone())),
    );
    shaped(reg, 182, "stone_slab2", Shape::Slab, TextureTable::uniform(red_sandstone));
    solid(reg, 204, "purpur_double_slab", &["purpur_block"]);
    shaped(reg, 205, "purpur_slab", Shape::Slab, TextureTable::single("purpur_block"));
}

fn thin(reg: &mut BlockRegistry) {
    let fences: [(BlockId, &str, &str); 7] = [
        (85, "fence", "planks_oak"),
        (113, "nether_brick_fence", "nether_brick"),
        (188, "spruce_fence", "planks_spruce"),
        (189, "birch_fence", "planks_birch"),
        (190, "jungle_fence", "planks_jungle"),
        (191, "dark_oak_fence", "planks_big_oak"),
        (192, "acacia_fence", "planks_acacia"),
    ];
    for (id, name, tex) in fences {
        shaped(reg, id, name, Shape::Fence, TextureTable::single(tex));
    }

    shaped(reg, 101, "iron_bars", Shape::Pane, TextureTable::single("iron_bars"));
    shaped(
        reg,
        102,
        "glass_pane",
        Shape::Pane,
        TextureTable::uniform(FaceTextures::new(&["glass_pane_top", "glass_pane_top", "glass"])),
    );

    shaped(reg, 50, "torch", Shape::Torch, TextureTable::single("torch_on"));
    shaped(
        reg,
        75,
        "unlit_redstone_torch",
        Shape::Torch,
        TextureTable::single("redstone_torch_off"),
    );
    shaped(reg, 76, "redstone_torch", Shape::Torch, TextureTable::single("redstone_torch_on"));
    shaped(reg, 65, "ladder", Shape::Ladder, TextureTable::single("ladder"));

    shaped(
        reg,
        66,
        "rail",
        Shape::Rail {
            kind: RailKind::Plain,
        },
        TextureTable::from_fn(|s| match s {
            0..=5 => Some(FaceTextures::uniform("rail_normal")),
            6..=9 => Some(FaceTextures::uniform("rail_normal_turned")),
            _ => None,
        }),
    );
    let powered_rail = |base: &'static str| {
        TextureTable::from_fn(move |s| {
            if bits(s, 5, 3) > 5 {
                return None;
            }
            let name = if bit_set(s, 3) { format!("{base}_powered") } else { base.to_string() };
            Some(FaceTextures::uniform(&name))
        })
    };
    let powered = Shape::Rail {
        kind: RailKind::Powered,
    };
    shaped(reg, 27, "golden_rail", powered.clone(), powered_rail("rail_golden"));
    shaped(reg, 28, "detector_rail", powered.clone(), powered_rail("rail_detector"));
    shaped(reg, 157, "activator_rail", powered, powered_rail("rail_activator"));

    // Bed slots: top, bottom, end cap on PosZ, sides elsewhere.
    shaped(
        reg,
        26,
        "bed",
        Shape::Bed,
        TextureTable::from_fn(|s| {
            let half = if bit_set(s, 3) { "head" } else { "feet" };
            let top = format!("bed_{half}_top");
            let end = format!("bed_{half}_end");
            let side = format!("bed_{half}_side");
            Some(
                FaceTextures::new(&[top.as_str(), "planks_oak", side.as_str()])
                    .with_face(Face::PosZ, &end),
            )
        }),
    );
}

fn plants(reg: &mut BlockRegistry) {
    shaped(
        reg,
        6,
        "sapling",
        Shape::Cross,
        TextureTable::from_fn(|s| {
            [
                "sapling_oak",
                "sapling_spruce",
                "sapling_birch",
                "sapling_jungle",
                "sapling_acacia",
                "sapling_roofed_oak",
            ]
            .get(bits(s, 5, 3) as usize)
            .map(|n| FaceTextures::uniform(n))
        }),
    );
    shaped(reg, 30, "web", Shape::Cross, TextureTable::single("web"));
    shaped(
        reg,
        31,
        "tallgrass",
        Shape::Cross,
        TextureTable::variants(&["deadbush", "tallgrass", "fern"]),
    );
    shaped(reg, 32, "deadbush", Shape::Cross, TextureTable::single("deadbush"));
    shaped(reg, 37, "yellow_flower", Shape::Cross, TextureTable::single("flower_dandelion"));
    shaped(
        reg,
        38,
        "red_flower",
        Shape::Cross,
        TextureTable::variants(&[
            "flower_rose",
            "flower_blue_orchid",
            "flower_allium",
            "flower_houstonia",
            "flower_tulip_red",
            "flower_tulip_orange",
            "flower_tulip_white",
            "flower_tulip_pink",
            "flower_oxeye_daisy",
        ]),
    );
    shaped(reg, 39, "brown_mushroom", Shape::Cross, TextureTable::single("mushroom_brown"));
    shaped(reg, 40, "red_mushroom", Shape::Cross, TextureTable::single("mushroom_red"));
    shaped(reg, 83, "reeds", Shape::Cross, TextureTable::single("reeds"));

    fn stages(prefix: &str, map: &[u8]) -> TextureTable {
        let names: Vec<String> = map.iter().map(|i| format!("{prefix}_stage_{i}")).collect();
        TextureTable::variants(&as_strs(&names))
    }
    shaped(reg, 59, "wheat", Shape::Crops, stages("wheat", &[0, 1, 2, 3, 4, 5, 6, 7]));
    shaped(reg, 141, "carrots", Shape::Crops, stages("carrots", &[0, 0, 1, 1, 2, 2, 2, 3]));
    shaped(reg, 142, "potatoes", Shape::Crops, stages("potatoes", &[0, 0, 1, 1, 2, 2, 2, 3]));
    shaped(reg, 115, "nether_wart", Shape::Crops, stages("nether_wart", &[0, 1, 1, 2]));
    shaped(reg, 207, "beetroots", Shape::Crops, stages("beetroots", &[0, 1, 2, 3]));
}

fn liquids(reg: &mut BlockRegistry) {
    let table = |still: &str, flow: &str| {
        TextureTable::uniform(FaceTextures::new(&[still, still, flow]))
    };
    for (id, name, family, still) in [
        (8, "flowing_water", LiquidFamily::Water, false),
        (9, "water", LiquidFamily::Water, true),
        (10, "flowing_lava", LiquidFamily::Lava, false),
        (11, "lava", LiquidFamily::Lava, true),
    ] {
        let textures = match family {
            LiquidFamily::Water => table("water_still", "water_flow"),
            LiquidFamily::Lava => table("lava_still", "lava_flow"),
        };
        shaped(reg, id, name, Shape::Liquid { family, still }, textures);
    }
}
