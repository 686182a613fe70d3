//! Instruction builder coverage across the option space.

use promptcraft_core::{
    AspectRatio, CameraMovement, DetailLevel, GenerationMode, GenerationOptions, SubModel,
};
use promptcraft_prompt::{CLOSING_DIRECTIVE, build_system_instruction};
use strum::IntoEnumIterator;

#[test]
fn every_option_combination_yields_closing_directive() -> anyhow::Result<()> {
    let models = SubModel::IMAGE
        .into_iter()
        .chain(SubModel::VIDEO)
        .chain([SubModel::Other("Imagen".to_string())]);

    for model in models {
        for detail in DetailLevel::iter() {
            for ratio in AspectRatio::iter() {
                let options = GenerationOptions::builder()
                    .idea("a paper boat")
                    .sub_model(model.clone())
                    .aspect_ratio(ratio)
                    .detail(detail)
                    .build()?;
                let instruction = build_system_instruction(&options);
                assert!(!instruction.is_empty());
                assert!(instruction.contains(CLOSING_DIRECTIVE));
                assert!(instruction.contains(detail.sentence_guidance()));
            }

            for camera in CameraMovement::FIXED {
                let options = GenerationOptions::builder()
                    .idea("a paper boat")
                    .mode(GenerationMode::Video)
                    .sub_model(model.clone())
                    .camera(camera)
                    .detail(detail)
                    .build()?;
                assert!(build_system_instruction(&options).ends_with(CLOSING_DIRECTIVE));
            }
        }
    }
    Ok(())
}

#[test]
fn image_and_video_instructions_differ() -> anyhow::Result<()> {
    let image = GenerationOptions::for_idea("a paper boat")?;
    let video = GenerationOptions::builder()
        .idea("a paper boat")
        .mode(GenerationMode::Video)
        .build()?;

    let image = build_system_instruction(&image);
    let video = build_system_instruction(&video);
    assert_ne!(image, video);
    assert!(image.contains("image generation"));
    assert!(video.contains("video generation"));
    Ok(())
}

#[test]
fn each_detail_level_has_distinct_sentence_range() {
    let ranges = ["1-2 sentences", "3-4 sentences", "5-7 sentences"];
    for (detail, range) in DetailLevel::iter().zip(ranges) {
        assert!(detail.sentence_guidance().contains(range));
    }
}
