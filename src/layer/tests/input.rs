/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 输入层单元测试
 */

use crate::layer::{Input, Layer, LayerState, TraitLayer};
use approx::assert_abs_diff_eq;

#[test]
fn test_input_initial_state() {
    for size in [0, 1, 10, 224] {
        let state = Input::new(Some(size)).calc_state(None).unwrap();
        assert_eq!(state.output_size, Some(size as i64));
        assert_eq!(state.receptive_field_size, 1);
        assert_abs_diff_eq!(state.receptive_field_center, 0.5);
        assert_eq!(state.jump, 1);
    }
}

#[test]
fn test_input_ignores_predecessor() {
    let predecessor = LayerState {
        output_size: Some(3),
        receptive_field_size: 9,
        receptive_field_center: -1.5,
        jump: 4,
    };
    let state = Input::new(Some(32)).calc_state(Some(&predecessor)).unwrap();
    assert_eq!(state, LayerState::initial(Some(32)));
}

#[test]
fn test_input_without_size() {
    let state = Input::new(None).calc_state(None).unwrap();
    assert_eq!(state.output_size, None);
    assert_eq!(state.output_size_text(), "?");
    assert_eq!(state.receptive_field_size, 1);
}

#[test]
fn test_input_description() {
    assert_eq!(Layer::input(Some(10)).description(), "Input");
    assert_eq!(Input::new(None).description(), "Input");
    assert_eq!(Layer::input(Some(10)).to_string(), "Input");
}
