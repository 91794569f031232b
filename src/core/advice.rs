use crate::core::Category;

/// Canned advice shown for one BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    /// Status name printed by the plain fallback.
    pub status: &'static str,
    pub short: &'static str,
    pub detailed: &'static str,
}

// indexed by `Category as usize`, keep in ascending band order.
static ADVICE: [Advice; 5] = [
    Advice {
        status: "您体质过轻",
        short: "您体质过轻，建议增加营养摄入，均衡饮食，加强身体锻炼",
        detailed: "【饮食建议】
• 增加每日热量摄入300-500卡路里
• 多摄入优质蛋白质：鱼类、瘦肉、蛋类、豆类
• 增加碳水化合物：全谷类、薯类
• 适量增加健康脂肪：坚果、橄榄油、鳄梨

【运动建议】
• 进行力量训练：增加肌肉质量
• 每周3-4次阻力训练
• 结合有氧运动：快走、游泳、骑自行车

【生活建议】
• 保证充足睡眠：每日7-9小时
• 规律三餐，避免暴饮暴食
• 必要时咨询营养师",
    },
    Advice {
        status: "您体质正常",
        short: "您体质正常，继续保持健康生活方式，定期体检",
        detailed: "【饮食建议】
• 保持均衡饮食：多样化食物选择
• 控制总热量摄入，维持理想体重
• 增加蔬果摄入：每日500g以上
• 适量摄入优质蛋白和健康脂肪

【运动建议】
• 保持中等强度运动：每周150分钟
• 结合有氧和力量训练
• 养成日常活动习惯：多走楼梯、散步

【生活建议】
• 定期体检：每年1次全面检查
• 保持健康生活方式
• 管理压力，保持心理健康",
    },
    Advice {
        status: "您体质过重",
        short: "您体质过重，建议适当控制饮食，增加运动量，建立健康生活习惯",
        detailed: "【饮食建议】
• 控制总热量摄入：每日减少300-500卡路里
• 减少精制碳水化合物和糖分摄入
• 增加膳食纤维：多吃蔬果和全谷类
• 采用少食多餐模式，避免饥饿感

【运动建议】
• 增加有氧运动：每周200-300分钟中等强度
• 结合高强度间歇训练（HIIT）
• 增加日常活动：步行、骑车代替开车

【生活建议】
• 记录饮食日记，监控摄入量
• 建立支持系统，寻求家人朋友帮助
• 定期监测体重变化",
    },
    Advice {
        status: "您体质肥胖",
        short: "您体质肥胖，建议咨询医生或营养师，制定科学的减重计划",
        detailed: "【饮食建议】
• 咨询营养师制定个性化饮食计划
• 严格控制热量摄入，科学减重
• 增加高纤维、低热量食物
• 避免高糖、高脂食物

【运动建议】
• 在医生指导下进行运动
• 选择低冲击性运动：游泳、水中健身
• 结合力量训练和心肺功能训练
• 建议寻求专业教练指导

【生活建议】
• 必须咨询医疗专业人士
• 定期监测相关健康指标
• 考虑行为疗法改变生活习惯",
    },
    Advice {
        status: "您严重肥胖",
        short: "您严重肥胖，建议立即咨询医生，接受专业医疗指导",
        detailed: "【饮食建议】
• 立即咨询医生或营养师
• 制定严格的医疗监督减重计划
• 可能需要特殊饮食干预
• 避免自行极端节食

【运动建议】
• 必须在医生监督下进行
• 从低强度活动开始，逐渐增加
• 可能需要康复训练
• 避免高强度运动风险

【生活建议】
• 寻求专业医疗帮助
• 进行全面健康评估
• 考虑心理支持和咨询
• 制定长期健康管理计划",
    },
];

const GUIDE_TITLE: &str = "BMI健康建议详细指南";

const GUIDE_CLOSING: &str = "温馨提示：
• 以上建议仅供参考
• 具体情况请咨询专业医师
• 保持积极心态，坚持健康生活方式";

pub fn advice_for(category: Category) -> &'static Advice {
    &ADVICE[category as usize]
}

/// Full advice text for every band, independent of any input.
pub fn reference_guide() -> String {
    let mut guide = String::new();
    guide.push_str(GUIDE_TITLE);
    guide.push_str("\n\n");

    for (idx, category) in Category::ALL.iter().enumerate() {
        guide.push_str(&format!(
            "{}. {} ({})\n",
            idx + 1,
            category.heading(),
            category.range_label()
        ));
        guide.push_str(category.advice().detailed);
        guide.push_str("\n\n");
    }

    guide.push_str(GUIDE_CLOSING);
    guide
}
